use serde::Deserialize;

use super::Operation;

pub const EVENT_OPERATION_COMPLETE: &str = "operation.complete";

/// Parsed body of an inbound callback. The signature is computed over the
/// raw body bytes, not over this parsed form, so parsing only happens
/// after authentication.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallbackEnvelope {
    pub event: EventDescriptor,
    #[serde(default)]
    pub data: Option<CallbackData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventDescriptor {
    #[serde(rename = "type")]
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EventKind {
    OperationComplete,
    Other(String),
}

impl From<String> for EventKind {
    fn from(s: String) -> Self {
        if s == EVENT_OPERATION_COMPLETE {
            EventKind::OperationComplete
        } else {
            EventKind::Other(s)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallbackData {
    #[serde(default)]
    pub operation: Option<Operation>,
}
