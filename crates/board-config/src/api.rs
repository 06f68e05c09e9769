//! API endpoint configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL of the demo service.
fn default_base_url() -> String {
    "http://localhost:8001".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Default user agent sent with every request.
fn default_user_agent() -> String {
    "sprintboard/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL the client issues requests against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// The request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check whether the config points somewhere other than the local
    /// default service.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.base_url != default_base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_service() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(!config.is_remote());
    }

    #[test]
    fn remote_detection() {
        let config = ApiConfig {
            base_url: "https://board.example.com".into(),
            ..Default::default()
        };
        assert!(config.is_remote());
    }
}
