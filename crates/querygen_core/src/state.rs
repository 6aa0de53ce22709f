use querygen_logging::qg_debug;

use crate::notify::{
    NotificationPool, MSG_ALREADY_SAVED, MSG_ENTER_TEXT, MSG_REMOVED, MSG_SAVED,
};
use crate::view_model::{AppViewModel, TOGGLE_HIDE_LABEL, TOGGLE_SHOW_LABEL};
use crate::{CardList, CardRef, Mode, RequestId, SaveOutcome, SavedCollection};

/// Where the panel gets its suggestions from when it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionSource {
    /// Synthesised from a fixed topic list and the mode label.
    #[default]
    Local,
    /// Requested from the backend suggestions endpoint.
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub text: String,
    /// Set once this card's own save control stored the query.
    pub marked_saved: bool,
}

/// Contents of a results-like container. Every refresh replaces it whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Idle,
    Loading,
    Empty,
    Cards(Vec<Card>),
}

impl Pane {
    fn from_items(items: Vec<String>) -> Self {
        if items.is_empty() {
            return Pane::Empty;
        }
        Pane::Cards(
            items
                .into_iter()
                .map(|text| Card {
                    text,
                    marked_saved: false,
                })
                .collect(),
        )
    }

    fn mark_saved(&mut self, index: usize, query: &str) {
        if let Pane::Cards(cards) = self {
            if let Some(card) = cards.get_mut(index).filter(|card| card.text == query) {
                card.marked_saved = true;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    mode: Mode,
    suggestion_source: SuggestionSource,
    input: String,
    input_invalid: bool,
    active_option: Option<String>,
    results_visible: bool,
    results: Pane,
    saved: SavedCollection,
    panel: PanelState,
    suggestions: Pane,
    notifications: NotificationPool,
    now_ms: u64,
    last_request_id: RequestId,
    pending_generation: Option<RequestId>,
    pending_suggestions: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_suggestion_source(mut self, source: SuggestionSource) -> Self {
        self.suggestion_source = source;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn saved(&self) -> &SavedCollection {
        &self.saved
    }

    pub fn suggestion_source(&self) -> SuggestionSource {
        self.suggestion_source
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            mode: self.mode,
            input_invalid: self.input_invalid,
            active_option: self.active_option.clone(),
            results_visible: self.results_visible,
            results: self.results.clone(),
            saved: self.saved.list().to_vec(),
            panel: self.panel,
            toggle_label: match self.panel {
                PanelState::Open => TOGGLE_HIDE_LABEL,
                PanelState::Closed => TOGGLE_SHOW_LABEL,
            },
            suggestions: self.suggestions.clone(),
            notifications: self.notifications.active().to_vec(),
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn notify(&mut self, message: &str) {
        self.notifications.push(message, self.now_ms);
        self.mark_dirty();
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
        if self.input_invalid && !self.input.trim().is_empty() {
            self.input_invalid = false;
        }
        self.mark_dirty();
    }

    /// Gate for generation: the trimmed input must be non-empty. A failed
    /// check marks the field invalid and tells the user.
    pub fn check_ready(&mut self) -> bool {
        if !self.input.trim().is_empty() {
            return true;
        }
        self.input_invalid = true;
        self.notify(MSG_ENTER_TEXT);
        false
    }

    pub(crate) fn begin_generation(&mut self, option: String) -> RequestId {
        let request_id = self.next_request_id();
        self.active_option = Some(option);
        self.pending_generation = Some(request_id);
        self.results = Pane::Loading;
        self.mark_dirty();
        request_id
    }

    /// Accepts a generation response only if it answers the latest request.
    pub(crate) fn take_generation(&mut self, request_id: RequestId) -> bool {
        if self.pending_generation != Some(request_id) {
            qg_debug!(
                "Discarding stale generation response {} (pending {:?})",
                request_id,
                self.pending_generation
            );
            return false;
        }
        self.pending_generation = None;
        true
    }

    /// Replaces the result cards. An empty list shows the placeholder and
    /// leaves the wrapper as it was.
    pub(crate) fn render_results(&mut self, items: Vec<String>) {
        self.results = Pane::from_items(items);
        if matches!(self.results, Pane::Cards(_)) {
            self.results_visible = true;
        }
        self.mark_dirty();
    }

    pub(crate) fn save(&mut self, query: &str, source: Option<CardRef>) -> SaveOutcome {
        let outcome = self.saved.save(query);
        match outcome {
            SaveOutcome::Saved => {
                if let Some(card) = source {
                    let pane = match card.list {
                        CardList::Results => &mut self.results,
                        CardList::Suggestions => &mut self.suggestions,
                    };
                    pane.mark_saved(card.index, query);
                }
                self.notify(MSG_SAVED);
            }
            SaveOutcome::AlreadySaved => self.notify(MSG_ALREADY_SAVED),
        }
        outcome
    }

    pub(crate) fn remove(&mut self, query: &str) {
        let removed = self.saved.remove(query);
        if removed == 0 {
            qg_debug!("Remove requested for unsaved query {:?}", query);
        }
        // Feedback fires even when nothing was removed.
        self.notify(MSG_REMOVED);
    }

    pub(crate) fn open_panel(&mut self) -> bool {
        self.panel = PanelState::Open;
        self.mark_dirty();
        self.suggestion_source == SuggestionSource::Remote
    }

    pub(crate) fn close_panel(&mut self) {
        self.panel = PanelState::Closed;
        self.mark_dirty();
    }

    pub(crate) fn begin_suggestions(&mut self) -> RequestId {
        let request_id = self.next_request_id();
        self.pending_suggestions = Some(request_id);
        self.suggestions = Pane::Loading;
        self.mark_dirty();
        request_id
    }

    pub(crate) fn take_suggestions(&mut self, request_id: RequestId) -> bool {
        if self.pending_suggestions != Some(request_id) {
            qg_debug!(
                "Discarding stale suggestions response {} (pending {:?})",
                request_id,
                self.pending_suggestions
            );
            return false;
        }
        self.pending_suggestions = None;
        true
    }

    pub(crate) fn render_suggestions(&mut self, items: Vec<String>) {
        self.suggestions = Pane::from_items(items);
        self.mark_dirty();
    }

    pub(crate) fn advance_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        if self.notifications.expire(self.now_ms) > 0 {
            self.mark_dirty();
        }
    }

    fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }
}
