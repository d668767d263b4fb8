//! Trait abstraction for the webhook client to enable mocking in tests

use crate::payload::SubmissionPayload;
use async_trait::async_trait;

/// Why a submission attempt failed. Shown to the user only as a generic
/// summary message; the detail goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Request failed: {0}")]
    RequestFailed(reqwest::StatusCode),
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Trait for webhook submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookClientTrait: Send + Sync {
    /// POST the payload as JSON to the configured endpoint.
    ///
    /// Returns the decoded response body on success. An unparseable body is
    /// not an error; it decodes to an empty object.
    async fn submit(&self, payload: SubmissionPayload) -> Result<serde_json::Value, SubmitError>;
}
