use serde::Deserialize;

/// HTTP conflict code reported by the remote service when a submission
/// races against an identical prior submission. Tolerated as success.
pub const CONFLICT_CODE: u16 = 409;

/// An asynchronous unit of remote work. Operations are created by
/// submission calls (or by the remote service itself) and their terminal
/// state is observed exclusively through completion callbacks; they are
/// never mutated or persisted locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Operation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OperationKind,
    #[serde(default)]
    pub parameters: OperationParameters,
    #[serde(default)]
    pub error: Option<OperationError>,
    #[serde(default)]
    pub result: Option<OperationResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OperationParameters {
    #[serde(default)]
    pub audio_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperationError {
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

impl OperationError {
    pub fn is_conflict(&self) -> bool {
        self.code == CONFLICT_CODE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OperationResult {
    #[serde(default)]
    pub document: Option<DocumentRef>,
}

/// Reference to a stored document produced by a completed operation. The
/// id must be resolved to a transient link before its bytes can be read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentRef {
    #[serde(default)]
    pub transcript: Option<String>,
}

/// Operation type discriminator. Kinds this system does not dispatch on
/// are preserved verbatim so they can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum OperationKind {
    TransloadAudio,
    ClassifyTranscript,
    Other(String),
}

impl From<String> for OperationKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "transload-audio" => OperationKind::TransloadAudio,
            "classify-transcript" => OperationKind::ClassifyTranscript,
            _ => OperationKind::Other(s),
        }
    }
}

impl OperationKind {
    pub fn as_str(&self) -> &str {
        match self {
            OperationKind::TransloadAudio => "transload-audio",
            OperationKind::ClassifyTranscript => "classify-transcript",
            OperationKind::Other(s) => s.as_str(),
        }
    }
}
