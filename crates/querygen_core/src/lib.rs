//! Querygen core: pure controller state machine and view-model helpers.
mod dispatch;
mod effect;
mod mode;
mod msg;
mod notify;
mod saved;
mod state;
mod suggestions;
mod update;
mod view_model;

pub use dispatch::{dispatch, CardList, CardRef};
pub use effect::{Effect, RequestId};
pub use mode::Mode;
pub use msg::{Msg, RequestResult};
pub use notify::{
    Notification, NotificationId, NotificationPool, MSG_ALREADY_SAVED, MSG_COPIED,
    MSG_COPY_FAILED, MSG_ENTER_TEXT, MSG_GENERATION_FAILED, MSG_REMOVED, MSG_SAVED,
    MSG_SUGGESTIONS_FAILED, NOTIFICATION_TTL_MS,
};
pub use saved::{SaveOutcome, SavedCollection};
pub use state::{AppState, Card, Pane, PanelState, SuggestionSource};
pub use suggestions::{local_suggestions, MAX_SUGGESTIONS};
pub use update::update;
pub use view_model::{AppViewModel, TOGGLE_HIDE_LABEL, TOGGLE_SHOW_LABEL};
