//! Host fetch client with cache bypass.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use trail_core::{RequestId, TimingContext};

use crate::source::SourceTag;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

/// Seam for data modules: anything that can fetch a JSON document.
///
/// Page `data` modules take `&impl Fetcher` so their degradation rules
/// can be unit tested with canned documents instead of a live host.
#[async_trait(?Send)]
pub trait Fetcher {
    /// Fetch a URL and parse the body as a JSON document.
    async fn fetch_value(&self, url: &str, tag: SourceTag) -> Result<Value, FetchError>;
}

/// Host-backed fetch client.
///
/// One attempt per call, no retry, no client-side timeout; the catalog
/// must always be current, so every request carries cache-bypass headers.
pub struct FetchClient {
    request_id: RequestId,
    timing: TimingContext,
}

impl FetchClient {
    /// Create a new fetch client.
    pub fn new(request_id: RequestId, timing: TimingContext) -> Self {
        Self { request_id, timing }
    }

    /// Fetch a URL and deserialize the JSON body.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        tag: SourceTag,
    ) -> Result<T, FetchError> {
        let req = spin_sdk::http::Request::builder()
            .method(spin_sdk::http::Method::Get)
            .uri(url)
            .header("cache-control", "no-store")
            .header("pragma", "no-cache")
            .build();
        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Request(format!("{}: {}", tag, e)))?;

        let status = *resp.status();
        if status >= 400 {
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            });
        }

        let bytes = resp.body().to_vec();
        let result: T = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;

        Ok(result)
    }

    /// Get the request ID.
    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Get the timing context.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }
}

#[async_trait(?Send)]
impl Fetcher for FetchClient {
    async fn fetch_value(&self, url: &str, tag: SourceTag) -> Result<Value, FetchError> {
        self.fetch(url, tag).await
    }
}
