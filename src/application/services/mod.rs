mod dispatcher;
mod registrar;
mod signature;
mod submission;

pub use dispatcher::{CallbackDispatcher, CallbackOutcome, DispatchError};
pub use registrar::WebhookRegistrar;
pub use signature::SignatureKey;
pub use submission::{SubmissionService, UploadReceipt};
