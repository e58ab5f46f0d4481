//! Gantry HTTP Client
//!
//! A thin client for the gate service's pipeline configuration endpoint.
//!
//! Callers depend on the [`GateRequester`] trait rather than on [`GateClient`]
//! directly, which lets tests substitute canned responses without a network.
//! The client never interprets status codes or bodies: every HTTP response is
//! handed back as a [`RawResponse`], and only network-level failures are errors.
//!
//! # Example
//!
//! ```no_run
//! use gantry_client::{GateClient, GateRequester};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GateClient::new();
//!     let gate = Url::parse("http://localhost:8084")?;
//!
//!     let response = client.fetch(&gate, "app").await?;
//!     println!("gate answered {}", response.status);
//!     Ok(())
//! }
//! ```

pub mod error;
mod pipelines;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use pipelines::pipeline_configs_url;

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Status code and body of a gate response, uninterpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Check if the status code is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to fetch the pipeline configs of an application from a gate
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait GateRequester: Send + Sync {
    /// Fetch `{base_url}/applications/{application}/pipelineConfigs`
    async fn fetch(&self, base_url: &Url, application: &str) -> Result<RawResponse>;
}

/// Settings used to build the underlying HTTP client
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Overall request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Accept invalid TLS certificates
    pub insecure: bool,
}

/// HTTP client for the gate API
#[derive(Debug, Clone)]
pub struct GateClient {
    /// HTTP client instance
    client: Client,
}

impl GateClient {
    /// Create a new gate client with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new gate client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use gantry_client::GateClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GateClient::with_client(http_client);
    /// ```
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Create a gate client from [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().danger_accept_invalid_certs(config.insecure);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(ClientError::Build)?;
        Ok(Self::with_client(client))
    }
}

impl Default for GateClient {
    fn default() -> Self {
        Self::new()
    }
}
