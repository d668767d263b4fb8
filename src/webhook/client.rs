//! HTTP client for submitting the form payload to the webhook

use super::traits::{SubmitError, WebhookClientTrait};
use crate::config::WebhookConfig;
use crate::payload::SubmissionPayload;
use async_trait::async_trait;

/// Client that POSTs submissions to the configured webhook URL
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(config: &WebhookConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.url.clone(),
        }
    }
}

#[async_trait]
impl WebhookClientTrait for WebhookClient {
    async fn submit(&self, payload: SubmissionPayload) -> Result<serde_json::Value, SubmitError> {
        let response = self.http.post(&self.url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::RequestFailed(status));
        }

        // The body is optional and ignored beyond existence; a decode
        // failure must not fail the submission.
        Ok(response
            .json()
            .await
            .unwrap_or_else(|_| serde_json::json!({})))
    }
}
