use crate::{CardRef, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the text input.
    InputChanged(String),
    /// User activated an option control carrying this identifier.
    OptionClicked(String),
    /// User asked to copy a query to the clipboard.
    CopyClicked(String),
    /// Clipboard write finished.
    CopyFinished { succeeded: bool },
    /// User asked to save a query; `source` names the card that was clicked.
    SaveClicked {
        query: String,
        source: Option<CardRef>,
    },
    /// User asked to remove a saved query.
    RemoveClicked(String),
    /// The suggestions panel finished its open transition.
    PanelShown,
    /// The suggestions panel started its close transition.
    PanelHidden,
    /// Backend answered a generation request.
    GenerationDone {
        request_id: RequestId,
        result: RequestResult,
    },
    /// Backend answered a suggestions request.
    SuggestionsDone {
        request_id: RequestId,
        result: RequestResult,
    },
    /// Logical clock advanced to `now_ms` since startup.
    Tick { now_ms: u64 },
    /// Fallback for unrecognised page events.
    NoOp,
}

/// Outcome of a backend call as seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestResult {
    Items(Vec<String>),
    Failed,
}
