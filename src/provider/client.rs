// client.rs
use crate::config::ApiConfig;
use crate::errors::SearchError;
use crate::provider::{SearchProvider, SearchRequest};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use url::Url;

const USER_AGENT: &str = concat!("listing_search/", env!("CARGO_PKG_VERSION"));

/// Listing search over a RapidAPI-hosted endpoint.
pub struct RapidApiClient {
    client: Client,
    base_url: Url,
    host: String,
    key: String,
}

impl RapidApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, SearchError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            SearchError::Config(format!("Invalid base URL {}: {e}", config.base_url))
        })?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            host: config.host.clone(),
            key: config.key.clone(),
        })
    }

    /// Full request URL with only the non-empty parameters attached.
    pub fn search_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().extend_pairs(request.query_params());
        url
    }

    fn headers(&self) -> Result<HeaderMap, SearchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-rapidapi-host",
            HeaderValue::from_str(&self.host)
                .map_err(|e| SearchError::Config(format!("Invalid API host header: {e}")))?,
        );
        headers.insert(
            "x-rapidapi-key",
            HeaderValue::from_str(&self.key)
                .map_err(|e| SearchError::Config(format!("Invalid API key header: {e}")))?,
        );
        Ok(headers)
    }
}

impl SearchProvider for RapidApiClient {
    fn search(&self, request: &SearchRequest) -> Result<Value, SearchError> {
        request.validate()?;

        let url = self.search_url(request);
        tracing::info!(url = %url, "searching listings");

        let start = std::time::Instant::now();
        let resp = self.client.get(url).headers(self.headers()?).send()?;

        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                elapsed = ?start.elapsed(),
                "search request rejected"
            );
            return Err(SearchError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let data: Value = serde_json::from_str(&text)?;
        tracing::debug!(
            elapsed = ?start.elapsed(),
            bytes = text.len(),
            "search response received"
        );

        Ok(data)
    }
}
