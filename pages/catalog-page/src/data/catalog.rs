//! Tour catalog fetch.

use serde_json::Value;
use trail_sdk::trail_data::{FetchError, Fetcher, SourceTag};

/// The catalog document, served by the static file host.
pub const TOURS_JSON_URL: &str = "/assets/data/tours.json";

/// Fetch the catalog and extract its raw tour records.
///
/// One attempt, cache bypassed by the client. A missing or non-array
/// `tours` field degrades to an empty catalog; only unreachable hosts
/// and unparsable bodies surface as errors.
pub async fn fetch_catalog(fetcher: &impl Fetcher) -> Result<Vec<Value>, FetchError> {
    let doc = fetcher.fetch_value(TOURS_JSON_URL, SourceTag::Catalog).await?;
    Ok(tour_model::tour_records(&doc).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;

    struct StubFetcher(Result<Value, FetchError>);

    #[async_trait(?Send)]
    impl Fetcher for StubFetcher {
        async fn fetch_value(&self, _url: &str, _tag: SourceTag) -> Result<Value, FetchError> {
            match &self.0 {
                Ok(doc) => Ok(doc.clone()),
                Err(FetchError::Http { status, url }) => Err(FetchError::Http {
                    status: *status,
                    url: url.clone(),
                }),
                Err(e) => Err(FetchError::Request(e.to_string())),
            }
        }
    }

    #[test]
    fn test_records_extracted_in_order() {
        let stub = StubFetcher(Ok(json!({
            "tours": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]
        })));
        let records = block_on(fetch_catalog(&stub)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "A");
        assert_eq!(records[1]["name"], "B");
    }

    #[test]
    fn test_non_array_tours_degrades_to_empty() {
        let stub = StubFetcher(Ok(json!({"tours": "not a list"})));
        assert!(block_on(fetch_catalog(&stub)).unwrap().is_empty());
    }

    #[test]
    fn test_http_failure_propagates() {
        let stub = StubFetcher(Err(FetchError::Http {
            status: 503,
            url: TOURS_JSON_URL.to_string(),
        }));
        assert!(block_on(fetch_catalog(&stub)).is_err());
    }
}
