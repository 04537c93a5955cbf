use super::{CallbackEnvelope, EventKind, Operation, OperationKind};

/// Outcome of interpreting an authenticated callback envelope: either an
/// action to run or a reason to deliberately do nothing. Every variant
/// answers HTTP 200 upstream; only `DecisionError` escalates.
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition {
    IgnoreUnknownEvent {
        kind: String,
    },
    IgnoreUnknownOperation {
        operation_id: String,
        kind: String,
    },
    ReportFailure {
        operation_id: String,
        code: u16,
        message: String,
    },
    SubmitClassification {
        audio_id: String,
    },
    FetchTranscript(Operation),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecisionError {
    #[error("operation.complete event carries no operation")]
    MissingOperation,
    #[error("operation {0} carries no audio_id parameter")]
    MissingAudioId(String),
}

/// Maps an envelope to a dispatch decision. A 409 conflict on the
/// operation is tolerated and falls through to normal dispatch, since a
/// resubmission racing against an identical prior submission is expected.
pub fn decide(envelope: CallbackEnvelope) -> Result<Disposition, DecisionError> {
    if let EventKind::Other(kind) = envelope.event.kind {
        return Ok(Disposition::IgnoreUnknownEvent { kind });
    }

    let operation = envelope
        .data
        .and_then(|d| d.operation)
        .ok_or(DecisionError::MissingOperation)?;

    let audio_id = operation
        .parameters
        .audio_id
        .clone()
        .ok_or_else(|| DecisionError::MissingAudioId(operation.id.clone()))?;

    if let Some(error) = operation.error.as_ref().filter(|e| !e.is_conflict()) {
        return Ok(Disposition::ReportFailure {
            operation_id: operation.id.clone(),
            code: error.code,
            message: error.message.clone(),
        });
    }

    match operation.kind {
        OperationKind::TransloadAudio => Ok(Disposition::SubmitClassification { audio_id }),
        OperationKind::ClassifyTranscript => Ok(Disposition::FetchTranscript(operation)),
        OperationKind::Other(ref kind) => Ok(Disposition::IgnoreUnknownOperation {
            kind: kind.clone(),
            operation_id: operation.id,
        }),
    }
}
