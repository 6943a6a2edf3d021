//! Client configuration.
//!
//! The remote REST API is reached through a single base URL. It defaults to
//! the relative `/api` path (same-origin deployment) and can be overridden
//! through the [`API_URL_ENV`] environment variable, e.g. for pointing a
//! desktop build at a staging server.

use std::env;

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "SKILLFORGE_API_URL";

const DEFAULT_BASE_URL: &str = "/api";

/// Where the remote REST API lives.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base path prepended to every endpoint, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config for an explicit base URL. Trailing slashes are
    /// stripped so endpoint paths can always start with `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL from the environment, falling back to `/api`.
    pub fn from_env() -> Self {
        match env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        assert_eq!(
            ApiConfig::new("https://api.example.com/").base_url,
            "https://api.example.com"
        );
        assert_eq!(ApiConfig::new("/api").base_url, "/api");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::default().base_url, "/api");
    }
}
