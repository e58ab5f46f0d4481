//! Configuration module
//!
//! Handles CLI configuration including the gate endpoint and HTTP settings.

use gantry_client::ClientConfig;
use std::time::Duration;

/// CLI configuration
///
/// Built once from the parsed arguments and passed by reference to command
/// handlers.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base URL of the gate service, validated by the command that uses it
    pub gate_endpoint: Option<String>,

    /// Request timeout
    pub timeout: Option<Duration>,

    /// Accept invalid TLS certificates from the gate
    pub insecure: bool,
}

impl Config {
    /// HTTP client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout,
            insecure: self.insecure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_projection() {
        let config = Config {
            gate_endpoint: Some("http://localhost:8084".to_string()),
            timeout: Some(Duration::from_secs(10)),
            insecure: true,
        };

        let client = config.client_config();
        assert_eq!(client.timeout, Some(Duration::from_secs(10)));
        assert!(client.insecure);
    }

    #[test]
    fn test_default_config_has_no_endpoint() {
        let config = Config::default();
        assert!(config.gate_endpoint.is_none());
        assert!(config.client_config().timeout.is_none());
    }
}
