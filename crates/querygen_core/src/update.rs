use crate::notify::{MSG_COPIED, MSG_COPY_FAILED, MSG_GENERATION_FAILED, MSG_SUGGESTIONS_FAILED};
use crate::{local_suggestions, AppState, Effect, Msg, RequestResult};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::OptionClicked(option) => {
            if option.is_empty() || !state.check_ready() {
                return (state, Vec::new());
            }
            let request_id = state.begin_generation(option.clone());
            vec![Effect::Generate {
                request_id,
                text: state.input().to_string(),
                option,
                mode: state.mode(),
            }]
        }
        Msg::GenerationDone { request_id, result } => {
            if !state.take_generation(request_id) {
                return (state, Vec::new());
            }
            match result {
                RequestResult::Items(items) => state.render_results(items),
                RequestResult::Failed => {
                    state.render_results(Vec::new());
                    state.notify(MSG_GENERATION_FAILED);
                }
            }
            Vec::new()
        }
        Msg::CopyClicked(text) => vec![Effect::CopyToClipboard { text }],
        Msg::CopyFinished { succeeded } => {
            state.notify(if succeeded { MSG_COPIED } else { MSG_COPY_FAILED });
            Vec::new()
        }
        Msg::SaveClicked { query, source } => {
            if !query.is_empty() {
                state.save(&query, source);
            }
            Vec::new()
        }
        Msg::RemoveClicked(query) => {
            state.remove(&query);
            Vec::new()
        }
        Msg::PanelShown => {
            if state.open_panel() {
                let request_id = state.begin_suggestions();
                vec![Effect::FetchSuggestions {
                    request_id,
                    text: state.input().to_string(),
                    mode: state.mode(),
                }]
            } else {
                state.render_suggestions(local_suggestions(state.mode()));
                Vec::new()
            }
        }
        Msg::PanelHidden => {
            state.close_panel();
            Vec::new()
        }
        Msg::SuggestionsDone { request_id, result } => {
            if !state.take_suggestions(request_id) {
                return (state, Vec::new());
            }
            match result {
                RequestResult::Items(items) => state.render_suggestions(items),
                RequestResult::Failed => {
                    state.render_suggestions(Vec::new());
                    state.notify(MSG_SUGGESTIONS_FAILED);
                }
            }
            Vec::new()
        }
        Msg::Tick { now_ms } => {
            state.advance_clock(now_ms);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
