use crate::Mode;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Generate {
        request_id: RequestId,
        text: String,
        option: String,
        mode: Mode,
    },
    FetchSuggestions {
        request_id: RequestId,
        text: String,
        mode: Mode,
    },
    CopyToClipboard { text: String },
}
