// src/config.rs
use crate::domain::paginate::DEFAULT_PAGE_SIZE;
use crate::errors::SearchError;
use std::time::Duration;

pub const DEFAULT_API_HOST: &str = "loopnet-api.p.rapidapi.com";
pub const DEFAULT_BASE_URL: &str =
    "https://loopnet-api.p.rapidapi.com/loopnet/sale/advanceSearch";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Provider credentials and session settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub host: String,
    pub key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: usize,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, SearchError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, with the variable lookup passed in.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SearchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let key = get("LISTING_API_KEY").ok_or_else(|| {
            SearchError::Config("LISTING_API_KEY environment variable not set".into())
        })?;

        let timeout_secs = match get("LISTING_API_TIMEOUT_SECS") {
            Some(v) => v.parse::<u64>().map_err(|e| {
                SearchError::Config(format!("LISTING_API_TIMEOUT_SECS is not a number: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let page_size = match get("LISTING_PAGE_SIZE") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    SearchError::Config(format!(
                        "LISTING_PAGE_SIZE must be a positive integer, got {v:?}"
                    ))
                })?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            host: get("LISTING_API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            key,
            base_url: get("LISTING_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_everything_but_the_key() {
        let cfg = ApiConfig::from_lookup(lookup(&[("LISTING_API_KEY", "abc")])).unwrap();
        assert_eq!(cfg.key, "abc");
        assert_eq!(cfg.host, DEFAULT_API_HOST);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert_eq!(cfg.page_size, 9);
    }

    #[test]
    fn missing_key_is_config_error() {
        let err = ApiConfig::from_lookup(lookup(&[("LISTING_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn bad_numbers_are_config_errors() {
        let err = ApiConfig::from_lookup(lookup(&[
            ("LISTING_API_KEY", "abc"),
            ("LISTING_PAGE_SIZE", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));

        let err = ApiConfig::from_lookup(lookup(&[
            ("LISTING_API_KEY", "abc"),
            ("LISTING_API_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn overrides_are_read() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            ("LISTING_API_KEY", "abc"),
            ("LISTING_API_HOST", "example.p.rapidapi.com"),
            ("LISTING_API_BASE_URL", "https://example.test/search"),
            ("LISTING_PAGE_SIZE", "12"),
        ]))
        .unwrap();
        assert_eq!(cfg.host, "example.p.rapidapi.com");
        assert_eq!(cfg.base_url, "https://example.test/search");
        assert_eq!(cfg.page_size, 12);
    }
}
