//! Catalog fetch for the detail lookup.
//!
//! The detail page re-reads the catalog on every view; nothing is
//! cached between requests, so the lookup always sees current data.

use serde_json::Value;
use trail_sdk::trail_data::{FetchError, Fetcher, SourceTag};

/// The catalog document, served by the static file host.
pub const TOURS_JSON_URL: &str = "/assets/data/tours.json";

/// Fetch the catalog records the lookup runs against.
pub async fn fetch_catalog(fetcher: &impl Fetcher) -> Result<Vec<Value>, FetchError> {
    let doc = fetcher.fetch_value(TOURS_JSON_URL, SourceTag::Catalog).await?;
    Ok(tour_model::tour_records(&doc).to_vec())
}
