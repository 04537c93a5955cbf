use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

pub type ByteStream<'a> = BoxStream<'a, Result<Bytes, io::Error>>;

/// Durable sink for downloaded transcripts. Implementations must settle
/// exactly once per call and leave no partial artifact behind when the
/// stream or the write fails.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Streams the transcript bytes for `audio_id` into storage and
    /// returns the number of bytes written.
    async fn store(
        &self,
        audio_id: &str,
        stream: ByteStream<'_>,
    ) -> Result<u64, TranscriptStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptStoreError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("write failed: {0}")]
    WriteFailed(String),
}
