mod client;
mod request;

pub use client::RapidApiClient;
pub use request::SearchRequest;

use crate::errors::SearchError;
use serde_json::Value;

/// Where listings come from. The response is handed back raw; the
/// normalizer decides what it means.
pub trait SearchProvider: Send + Sync {
    fn search(&self, request: &SearchRequest) -> Result<Value, SearchError>;
}
