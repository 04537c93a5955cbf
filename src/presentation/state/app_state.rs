use std::sync::Arc;

use crate::application::ports::{MediaService, TranscriptFetcher};
use crate::application::services::CallbackDispatcher;

pub struct AppState<M, F>
where
    M: MediaService,
    F: TranscriptFetcher,
{
    pub dispatcher: Arc<CallbackDispatcher<M, F>>,
}

impl<M, F> Clone for AppState<M, F>
where
    M: MediaService,
    F: TranscriptFetcher,
{
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}
