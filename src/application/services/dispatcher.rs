use std::sync::Arc;

use super::signature::SignatureKey;
use super::submission::SubmissionService;
use crate::application::ports::{
    FetchError, FetchOutcome, MediaService, MediaServiceError, TranscriptFetcher,
};
use crate::domain::{CallbackEnvelope, DecisionError, Disposition, decide};

/// Terminal state of one callback handling. Every variant answers HTTP
/// 200; genuine failures surface as `DispatchError` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Signature missing or mismatched. Deliberately indistinguishable
    /// from success at the HTTP level so a forger learns nothing and the
    /// provider does not retry.
    RejectedSignature,
    IgnoredEvent { kind: String },
    IgnoredOperation { operation_id: String },
    FailureReported { operation_id: String },
    ClassificationSubmitted { operation_id: String },
    TranscriptStored { bytes: u64 },
    LinkLogged,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("callback payload is not valid JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error(transparent)]
    Decision(#[from] DecisionError),
    #[error(transparent)]
    Media(#[from] MediaServiceError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl DispatchError {
    /// Status the top-level handler answers with. Expected business
    /// non-events never reach here; whatever does is classified so the
    /// provider's retry policy only fires on genuine internal faults.
    pub fn status(&self) -> u16 {
        match self {
            DispatchError::MalformedPayload(_) => 400,
            DispatchError::Decision(_) => 422,
            DispatchError::Media(_) => 502,
            DispatchError::Fetch(fetch) => match fetch {
                FetchError::MissingAudioId(_) | FetchError::MissingDocument(_) => 422,
                FetchError::Media(_) | FetchError::LinkRequest(_) | FetchError::LinkStatus(_) => {
                    502
                }
                FetchError::Store(_) => 500,
            },
        }
    }
}

/// Per-request state machine for inbound callbacks: authenticate the raw
/// payload, interpret the completion event, and route to the submission
/// service or the transcript fetcher. Holds no cross-request state.
pub struct CallbackDispatcher<M, F>
where
    M: MediaService,
    F: TranscriptFetcher,
{
    signature: SignatureKey,
    submissions: Arc<SubmissionService<M>>,
    fetcher: Arc<F>,
}

impl<M, F> CallbackDispatcher<M, F>
where
    M: MediaService,
    F: TranscriptFetcher,
{
    pub fn new(
        signature: SignatureKey,
        submissions: Arc<SubmissionService<M>>,
        fetcher: Arc<F>,
    ) -> Self {
        Self {
            signature,
            submissions,
            fetcher,
        }
    }

    /// Runs the full decision tree over one raw callback. `raw_body` must
    /// be the exact bytes received on the wire.
    pub async fn dispatch(
        &self,
        raw_body: &[u8],
        signature: Option<&str>,
    ) -> Result<CallbackOutcome, DispatchError> {
        let Some(provided) = signature else {
            tracing::warn!("Callback rejected: signature header missing");
            return Ok(CallbackOutcome::RejectedSignature);
        };

        if !self.signature.verify(provided, raw_body) {
            tracing::warn!("Callback rejected: signature mismatch");
            return Ok(CallbackOutcome::RejectedSignature);
        }

        let envelope: CallbackEnvelope = serde_json::from_slice(raw_body)?;

        match decide(envelope)? {
            Disposition::IgnoreUnknownEvent { kind } => {
                tracing::warn!(event_type = %kind, "Unhandleable event type");
                Ok(CallbackOutcome::IgnoredEvent { kind })
            }
            Disposition::IgnoreUnknownOperation { operation_id, kind } => {
                tracing::warn!(
                    operation_id = %operation_id,
                    operation_type = %kind,
                    "Unhandleable operation type"
                );
                Ok(CallbackOutcome::IgnoredOperation { operation_id })
            }
            Disposition::ReportFailure {
                operation_id,
                code,
                message,
            } => {
                tracing::error!(
                    operation_id = %operation_id,
                    code = code,
                    message = %message,
                    "Remote operation failed"
                );
                Ok(CallbackOutcome::FailureReported { operation_id })
            }
            Disposition::SubmitClassification { audio_id } => {
                let operation_id = self.submissions.analyze_audio(&audio_id).await?;
                Ok(CallbackOutcome::ClassificationSubmitted { operation_id })
            }
            Disposition::FetchTranscript(operation) => {
                match self.fetcher.fetch(&operation).await? {
                    FetchOutcome::Stored { bytes } => {
                        Ok(CallbackOutcome::TranscriptStored { bytes })
                    }
                    FetchOutcome::LinkLogged => Ok(CallbackOutcome::LinkLogged),
                }
            }
        }
    }
}
