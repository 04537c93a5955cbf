use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{ByteStream, TranscriptStore, TranscriptStoreError};

/// Writes transcripts as `<audio_id>.json` under the configured directory.
/// The multipart upload keeps the partially written object invisible until
/// `complete`; aborting on the first stream or write error guarantees the
/// operation settles exactly once and leaves no partial file behind.
pub struct LocalTranscriptStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalTranscriptStore {
    pub fn new(base_path: PathBuf) -> Result<Self, TranscriptStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| TranscriptStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    fn object_path(audio_id: &str) -> StorePath {
        StorePath::from(format!("{}.json", audio_id))
    }
}

#[async_trait]
impl TranscriptStore for LocalTranscriptStore {
    async fn store(
        &self,
        audio_id: &str,
        mut stream: ByteStream<'_>,
    ) -> Result<u64, TranscriptStoreError> {
        let path = Self::object_path(audio_id);
        let mut upload = self
            .inner
            .put_multipart(&path)
            .await
            .map_err(|e| TranscriptStoreError::WriteFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(TranscriptStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(TranscriptStoreError::WriteFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| TranscriptStoreError::WriteFailed(e.to_string()))?;

        Ok(total_bytes)
    }
}
