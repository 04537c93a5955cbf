use async_trait::async_trait;

use super::{MediaServiceError, TranscriptStoreError};
use crate::domain::Operation;

/// Retrieves the artifact of a completed classification operation: either
/// downloaded into durable storage or, when storage is not provisioned,
/// surfaced as a logged transient link.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch(&self, operation: &Operation) -> Result<FetchOutcome, FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Stored { bytes: u64 },
    LinkLogged,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("operation {0} carries no audio_id parameter")]
    MissingAudioId(String),
    #[error("operation {0} completed without a transcript document")]
    MissingDocument(String),
    #[error(transparent)]
    Media(#[from] MediaServiceError),
    #[error("transcript link request failed: {0}")]
    LinkRequest(String),
    #[error("transcript link returned status {0}")]
    LinkStatus(u16),
    #[error(transparent)]
    Store(#[from] TranscriptStoreError),
}
