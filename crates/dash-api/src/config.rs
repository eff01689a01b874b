//! API connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every resource path is appended to.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Path of the contributions list.
    pub contributions_path: String,

    /// Path of the products collection (list, update and delete).
    pub products_path: String,

    /// Path of the categories list.
    pub categories_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: 30,
            contributions_path: "contributions".to_string(),
            products_path: "products".to_string(),
            categories_path: "categories".to_string(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with default paths.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Join the base URL and path segments with single slashes.
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.trim_end_matches('/').to_string();
        for segment in segments {
            let segment = segment.trim_matches('/');
            if !segment.is_empty() {
                url.push('/');
                url.push_str(segment);
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::with_base_url("http://host/api/");
        assert_eq!(config.url(&["products"]), "http://host/api/products");
        assert_eq!(config.url(&["/products/", "42"]), "http://host/api/products/42");
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }
}
