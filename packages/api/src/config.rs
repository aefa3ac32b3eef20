//! # Client configuration
//!
//! [`ApiConfig`] holds the base URL of the student service and the page size the
//! list view falls back to when the URL carries none. It can be parsed from TOML:
//!
//! ```toml
//! base_url = "http://localhost:5001"
//! default_per_page = 10
//! ```
//!
//! or assembled from the environment with [`ApiConfig::from_env`]:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `STUDENT_API_URL` | `base_url` |
//! | `STUDENT_API_PER_PAGE` | `default_per_page` |
//!
//! Native builds read these at runtime (after loading `.env` through `dotenvy`).
//! Browser builds have no process environment, so the values baked in at compile
//! time are used instead. Missing or unparsable values fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Default base URL of the student service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Default number of records per page.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Connection settings for the student service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Page size used when the list URL does not carry one.
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_per_page: default_per_page(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the default page size.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        if per_page > 0 {
            self.default_per_page = per_page;
        }
        self
    }

    /// Build the config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            let base_url = std::env::var("STUDENT_API_URL").ok();
            let per_page = std::env::var("STUDENT_API_PER_PAGE").ok();
            Self::from_parts(base_url.as_deref(), per_page.as_deref())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_parts(
                option_env!("STUDENT_API_URL"),
                option_env!("STUDENT_API_PER_PAGE"),
            )
        }
    }

    fn from_parts(base_url: Option<&str>, per_page: Option<&str>) -> Self {
        let mut config = match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        };
        match per_page.map(|raw| raw.trim().parse::<u32>()) {
            Some(Ok(n)) => config = config.with_per_page(n),
            Some(Err(e)) => tracing::warn!("Ignoring STUDENT_API_PER_PAGE: {}", e),
            None => {}
        }
        config
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.base_url = normalize_base_url(config.base_url);
        if config.default_per_page == 0 {
            config.default_per_page = DEFAULT_PER_PAGE;
        }
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Join a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5001");
        assert_eq!(config.default_per_page, 10);
        assert_eq!(ApiConfig::from_toml("").unwrap(), config);
    }

    #[test]
    fn test_from_toml_trims_trailing_slash() {
        let config = ApiConfig::from_toml(
            r#"
            base_url = "https://students.example.org/"
            default_per_page = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://students.example.org");
        assert_eq!(config.default_per_page, 25);
        assert_eq!(
            config.url("/students/3"),
            "https://students.example.org/students/3"
        );
    }

    #[test]
    fn test_zero_per_page_is_rejected() {
        let config = ApiConfig::from_toml("default_per_page = 0").unwrap();
        assert_eq!(config.default_per_page, DEFAULT_PER_PAGE);
        assert_eq!(ApiConfig::default().with_per_page(0).default_per_page, 10);
    }

    #[test]
    fn test_from_parts() {
        let config = ApiConfig::from_parts(Some("http://api:8000/"), Some("5"));
        assert_eq!(config.base_url, "http://api:8000");
        assert_eq!(config.default_per_page, 5);

        let config = ApiConfig::from_parts(Some("  "), Some("many"));
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ApiConfig::new("http://10.0.0.2:5001").with_per_page(20);
        let text = config.to_toml().unwrap();
        assert_eq!(ApiConfig::from_toml(&text).unwrap(), config);
    }
}
