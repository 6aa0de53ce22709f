use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RequestId = u64;

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub text: String,
    pub option: String,
    pub mode: String,
}

/// Body of `POST /ai_suggestions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestRequest {
    pub text: String,
    pub mode: String,
}

/// An absent or null `result` field reads as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub(crate) result: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub(crate) struct SuggestResponse {
    #[serde(default)]
    pub(crate) suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GenerationCompleted {
        request_id: RequestId,
        result: Result<Vec<String>, BackendError>,
    },
    SuggestionsCompleted {
        request_id: RequestId,
        result: Result<Vec<String>, BackendError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct BackendError {
    pub kind: FailureKind,
    pub message: String,
}

impl BackendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("malformed response body")]
    MalformedBody,
    #[error("engine unavailable")]
    Unavailable,
    #[error("network error")]
    Network,
}
