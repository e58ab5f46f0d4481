//! Pipeline configuration endpoint

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;
use url::Url;

use crate::error::{ClientError, Result};
use crate::{GateClient, GateRequester, RawResponse};

/// Build the pipeline configs URL for an application
///
/// Any path already on `base` is kept, so a gate mounted under a prefix works.
/// The application name is percent-encoded as a single path segment.
///
/// # Example
/// ```
/// use gantry_client::pipeline_configs_url;
/// use url::Url;
///
/// let base = Url::parse("https://gate.example.com/api/").unwrap();
/// let url = pipeline_configs_url(&base, "app").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://gate.example.com/api/applications/app/pipelineConfigs"
/// );
/// ```
pub fn pipeline_configs_url(base: &Url, application: &str) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidEndpoint(base.to_string()))?
        .pop_if_empty()
        .extend(["applications", application, "pipelineConfigs"]);

    Ok(url)
}

#[async_trait]
impl GateRequester for GateClient {
    async fn fetch(&self, base_url: &Url, application: &str) -> Result<RawResponse> {
        let url = pipeline_configs_url(base_url, application)?;
        debug!(%url, "requesting pipeline configs");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "gate responded");

        Ok(RawResponse { status, body })
    }
}
