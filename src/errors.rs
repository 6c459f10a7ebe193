// errors.rs
use thiserror::Error;

/// Everything that can go wrong between the search form and a rendered view.
/// None of these are fatal: the controller keeps its last good view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Bad form input; no request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    Http { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

impl SearchError {
    /// Transport failures are worth another try; bad input and bad config are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SearchError::Network(_) | SearchError::Http { .. } | SearchError::MalformedBody(_)
        )
    }

    /// Headline shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            SearchError::Validation(_) => "Please check your search",
            SearchError::Config(_) => "Search is not configured",
            SearchError::Http { status: 401, .. } => "API Authentication Error",
            SearchError::Http { status: 429, .. } => "Rate Limit Exceeded",
            SearchError::Http { status: 404, .. } => "API Endpoint Not Found",
            SearchError::Network(_) | SearchError::Http { .. } | SearchError::MalformedBody(_) => {
                "Failed to fetch properties"
            }
        }
    }

    /// Smaller print under the headline.
    pub fn details(&self) -> String {
        match self {
            SearchError::Http { status: 401, .. } => "Please check your API key configuration.".into(),
            SearchError::Http { status: 429, .. } => {
                "Too many requests. Please wait a moment and try again.".into()
            }
            SearchError::Http { status: 404, .. } => {
                "The search service may be temporarily unavailable.".into()
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::MalformedBody(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> SearchError {
        SearchError::Http {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn known_statuses_get_friendly_titles() {
        assert_eq!(http(401).title(), "API Authentication Error");
        assert_eq!(http(429).title(), "Rate Limit Exceeded");
        assert_eq!(http(404).title(), "API Endpoint Not Found");
        assert_eq!(http(500).title(), "Failed to fetch properties");
        assert_eq!(http(500).details(), "HTTP error! status: 500");
    }

    #[test]
    fn only_transport_failures_are_retryable() {
        assert!(http(503).is_retryable());
        assert!(SearchError::Network("reset".into()).is_retryable());
        assert!(SearchError::MalformedBody("eof".into()).is_retryable());
        assert!(!SearchError::Validation("x".into()).is_retryable());
        assert!(!SearchError::Config("x".into()).is_retryable());
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = SearchError::Validation("Please enter a search location".into());
        assert_eq!(err.details(), "Please enter a search location");
    }
}
