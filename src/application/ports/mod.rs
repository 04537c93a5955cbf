mod media_service;
mod transcript_fetcher;
mod transcript_store;

pub use media_service::{ClassificationSpec, MediaService, MediaServiceError};
pub use transcript_fetcher::{FetchError, FetchOutcome, TranscriptFetcher};
pub use transcript_store::{ByteStream, TranscriptStore, TranscriptStoreError};
