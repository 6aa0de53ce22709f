use crate::{Mode, Notification, Pane, PanelState};

pub const TOGGLE_SHOW_LABEL: &str = "Show AI Suggestions";
pub const TOGGLE_HIDE_LABEL: &str = "Hide AI Suggestions";

/// Snapshot of everything the page needs to draw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: Mode,
    pub input_invalid: bool,
    pub active_option: Option<String>,
    pub results_visible: bool,
    pub results: Pane,
    pub saved: Vec<String>,
    pub panel: PanelState,
    pub toggle_label: &'static str,
    pub suggestions: Pane,
    pub notifications: Vec<Notification>,
}
