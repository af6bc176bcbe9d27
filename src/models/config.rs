//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;
use validator::Validate;

fn default_backend_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub address: String,
    pub port: u16,
    /// Base URL of the inventory REST backend.
    #[validate(url)]
    pub backend_url: String,
    #[serde(default = "default_backend_timeout_secs")]
    #[validate(range(min = 1))]
    pub backend_timeout_secs: u64,
}

impl ServerConfig {
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(backend_url: &str) -> ServerConfig {
        ServerConfig {
            address: "127.0.0.1".to_string(),
            port: 8080,
            backend_url: backend_url.to_string(),
            backend_timeout_secs: 30,
        }
    }

    #[test]
    fn accepts_http_backend_url() {
        assert!(config("http://localhost:3000/api").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_backend_url() {
        assert!(config("not a url").validate().is_err());
    }
}
