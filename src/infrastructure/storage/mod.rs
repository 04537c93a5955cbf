mod local_transcript_store;

pub use local_transcript_store::LocalTranscriptStore;
