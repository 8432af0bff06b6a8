//! HTTP Update Client
//!
//! Sends update requests to the configured endpoint from the browser.

use address_updater_shared::{ClientConfig, HttpReply, SubmitError, UpdateClient, UpdateRequest};
use gloo_net::http::Request;

/// Browser client for the update service
#[derive(Debug, Clone, PartialEq)]
pub struct HttpUpdateClient {
    config: ClientConfig,
}

impl HttpUpdateClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl UpdateClient for HttpUpdateClient {
    async fn post_update(&self, request: &UpdateRequest) -> Result<HttpReply, SubmitError> {
        tracing::debug!(endpoint = %self.config.endpoint, company_id = %request.company_id, "Sending update request");

        let response = Request::post(&self.config.endpoint)
            .query(self.config.query_params())
            .json(request)
            .map_err(|e| SubmitError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        // A body we cannot read is treated like an empty one.
        let body = response.text().await.unwrap_or_default();

        tracing::debug!(status, bytes = body.len(), "Update service replied");

        Ok(HttpReply::new(status, body))
    }
}
