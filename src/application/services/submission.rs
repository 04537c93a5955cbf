use std::sync::Arc;

use crate::application::ports::{ClassificationSpec, MediaService, MediaServiceError};
use crate::domain::default_speaker_channels;

/// Identifiers returned by an offline upload: the new audio entity and
/// the transload operation working on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub audio_id: String,
    pub operation_id: String,
}

/// Submits new remote operations. Both entry points return as soon as the
/// remote service has accepted the submission; completion arrives later
/// through the webhook dispatcher.
pub struct SubmissionService<M>
where
    M: MediaService,
{
    media: Arc<M>,
    classification: ClassificationSpec,
}

impl<M> SubmissionService<M>
where
    M: MediaService,
{
    pub fn new(media: Arc<M>, classification: ClassificationSpec) -> Self {
        Self {
            media,
            classification,
        }
    }

    /// Submits a classification request for an uploaded recording, tagged
    /// with the audio id for traceability. Returns the operation id.
    pub async fn analyze_audio(&self, audio_id: &str) -> Result<String, MediaServiceError> {
        let tags = vec![audio_id.to_string()];
        let operation_id = self
            .media
            .submit_classification(audio_id, &self.classification, &tags)
            .await?;

        tracing::info!(
            audio_id = %audio_id,
            operation_id = %operation_id,
            "Classification submitted"
        );

        Ok(operation_id)
    }

    /// Registers a new audio entity with the fixed two-speaker channel
    /// mapping, then submits an upload-from-URL operation for it.
    pub async fn upload(
        &self,
        source_url: &str,
        tags: &[String],
    ) -> Result<UploadReceipt, MediaServiceError> {
        let channels = default_speaker_channels();
        let audio_id = self.media.create_audio(&channels).await?;

        let mut operation_tags = Vec::with_capacity(tags.len() + 1);
        operation_tags.push(audio_id.clone());
        operation_tags.extend_from_slice(tags);

        let operation_id = self
            .media
            .submit_transload(&audio_id, source_url, &operation_tags)
            .await?;

        tracing::info!(
            audio_id = %audio_id,
            operation_id = %operation_id,
            source_url = %source_url,
            "Transload submitted"
        );

        Ok(UploadReceipt {
            audio_id,
            operation_id,
        })
    }
}
