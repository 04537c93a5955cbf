mod http_transcript_fetcher;

pub use http_transcript_fetcher::HttpTranscriptFetcher;
