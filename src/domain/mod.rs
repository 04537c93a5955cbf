mod audio;
mod dispatch;
mod envelope;
mod operation;
mod webhook;

pub use audio::{SpeakerChannel, SpeakerRole, default_speaker_channels};
pub use dispatch::{DecisionError, Disposition, decide};
pub use envelope::{
    CallbackData, CallbackEnvelope, EVENT_OPERATION_COMPLETE, EventDescriptor, EventKind,
};
pub use operation::{
    CONFLICT_CODE, DocumentRef, Operation, OperationError, OperationKind, OperationParameters,
    OperationResult,
};
pub use webhook::WebhookSubscription;
