pub const INPUT_TEXT: &str = "user_input";
pub const RESULTS_WRAPPER: &str = "results";
pub const RESULTS_CONTAINER: &str = "resultsContainer";
pub const SAVED_LIST: &str = "saved-list";
pub const SAVED_PLACEHOLDER: &str = "saved-placeholder";
pub const TOGGLE_AI_BUTTON: &str = "toggleAISuggestions";
pub const AI_RESULTS_CONTAINER: &str = "aiResultsContainer";
pub const NOTIFICATIONS: &str = "notifications";

pub const CLASS_INVALID: &str = "is-invalid";
