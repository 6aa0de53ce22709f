//! Querygen engine: backend client and effect execution.
mod client;
mod engine;
mod purge;
mod types;

pub use client::{ClientSettings, QueryBackend, ReqwestBackend};
pub use engine::{EngineEvents, EngineHandle};
pub use purge::{purge_legacy_state, PurgeError, LEGACY_KEY_PREFIX};
pub use types::{
    BackendError, EngineEvent, FailureKind, GenerateRequest, RequestId, SuggestRequest,
};
