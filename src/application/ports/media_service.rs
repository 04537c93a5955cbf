use async_trait::async_trait;

use crate::domain::{SpeakerChannel, WebhookSubscription};

/// Fixed configuration applied to every classification submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationSpec {
    pub language: String,
    pub redact_pii: bool,
}

impl Default for ClassificationSpec {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            redact_pii: false,
        }
    }
}

/// Seam to the remote audio-processing service. All submissions are
/// fire-and-forget: they return the new entity's identifier immediately,
/// and completion is observed later through the webhook channel.
#[async_trait]
pub trait MediaService: Send + Sync {
    async fn create_audio(
        &self,
        channels: &[SpeakerChannel],
    ) -> Result<String, MediaServiceError>;

    async fn submit_transload(
        &self,
        audio_id: &str,
        source_url: &str,
        tags: &[String],
    ) -> Result<String, MediaServiceError>;

    async fn submit_classification(
        &self,
        audio_id: &str,
        spec: &ClassificationSpec,
        tags: &[String],
    ) -> Result<String, MediaServiceError>;

    /// Resolves a stored document to a transient, time-limited direct link.
    async fn resolve_document_link(&self, document_id: &str)
        -> Result<String, MediaServiceError>;

    async fn list_webhooks(
        &self,
        event: &str,
    ) -> Result<Vec<WebhookSubscription>, MediaServiceError>;

    async fn create_webhook(
        &self,
        url: &str,
        event: &str,
        secret: &str,
    ) -> Result<WebhookSubscription, MediaServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaServiceError {
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("api returned status {status}: {detail}")]
    Api { status: u16, detail: String },
    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),
}
