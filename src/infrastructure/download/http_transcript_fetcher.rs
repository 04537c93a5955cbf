use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;

use crate::application::ports::{
    FetchError, FetchOutcome, MediaService, TranscriptFetcher, TranscriptStore,
};
use crate::domain::Operation;

/// Resolves a completed operation's document to a transient link and
/// streams its bytes into the transcript store. Without a store (no
/// durable storage provisioned) the link is logged instead of fetched.
pub struct HttpTranscriptFetcher<M>
where
    M: MediaService,
{
    client: reqwest::Client,
    media: Arc<M>,
    store: Option<Arc<dyn TranscriptStore>>,
}

impl<M> HttpTranscriptFetcher<M>
where
    M: MediaService,
{
    pub fn new(media: Arc<M>, store: Option<Arc<dyn TranscriptStore>>) -> Self {
        Self {
            client: reqwest::Client::new(),
            media,
            store,
        }
    }
}

#[async_trait]
impl<M> TranscriptFetcher for HttpTranscriptFetcher<M>
where
    M: MediaService,
{
    async fn fetch(&self, operation: &Operation) -> Result<FetchOutcome, FetchError> {
        let audio_id = operation
            .parameters
            .audio_id
            .as_deref()
            .ok_or_else(|| FetchError::MissingAudioId(operation.id.clone()))?;

        let document_id = operation
            .result
            .as_ref()
            .and_then(|r| r.document.as_ref())
            .and_then(|d| d.transcript.as_deref())
            .ok_or_else(|| FetchError::MissingDocument(operation.id.clone()))?;

        let link = self.media.resolve_document_link(document_id).await?;

        let Some(store) = &self.store else {
            tracing::info!(
                audio_id = %audio_id,
                link = %link,
                "Transcript ready; durable storage unavailable, logging link"
            );
            return Ok(FetchOutcome::LinkLogged);
        };

        let response = self
            .client
            .get(&link)
            .send()
            .await
            .map_err(|e| FetchError::LinkRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::LinkStatus(status.as_u16()));
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| io::Error::new(io::ErrorKind::Other, e)))
            .boxed();

        let bytes = store.store(audio_id, stream).await?;

        tracing::info!(audio_id = %audio_id, bytes = bytes, "Transcript stored");
        Ok(FetchOutcome::Stored { bytes })
    }
}
