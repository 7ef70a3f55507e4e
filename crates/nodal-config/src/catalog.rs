//! Remote catalog connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// USGS ComCat FDSN event web service.
fn default_base_url() -> String {
    String::from("https://earthquake.usgs.gov/fdsnws/event/1/")
}

fn default_user_agent() -> String {
    format!("nodal/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_timeout_secs() -> u64 {
    30
}

/// The service refuses `limit` values above 20000.
const fn default_page_size() -> usize {
    20_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// FDSN event service root; `query` is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Events requested per search page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl CatalogConfig {
    /// Check values that would make every request fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-HTTP base URL, a zero
    /// timeout, or a page size outside `1..=20000`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(invalid("catalog.base_url", "must be an http(s) URL"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("catalog.timeout_secs", "must be greater than zero"));
        }
        if self.page_size == 0 || self.page_size > default_page_size() {
            return Err(invalid("catalog.page_size", "must be between 1 and 20000"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_comcat() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://earthquake.usgs.gov/fdsnws/event/1/");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.page_size, 20_000);
        assert!(config.user_agent.starts_with("nodal/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_oversized_page() {
        let config = CatalogConfig {
            page_size: 20_001,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "catalog.page_size"
        ));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = CatalogConfig {
            base_url: "ftp://example.org/".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = CatalogConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
