use querygen_core::{AppViewModel, Card, CardList, CardRef, Pane};

use super::constants::*;
use super::markup;
use crate::platform::bridge::PageCommand;

const GENERATING_TEXT: &str = "Generating…";
const LOADING_SUGGESTIONS_TEXT: &str = "Loading suggestions…";
const NO_RESULTS_TEXT: &str = "No results";
const NO_SUGGESTIONS_TEXT: &str = "No suggestions";

/// Projects the whole view onto the page. Every container is rewritten, so
/// nothing from an earlier render survives a refresh.
#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel) -> Vec<PageCommand> {
    let mut cmds = Vec::new();

    cmds.push(PageCommand::SetClass {
        target: INPUT_TEXT,
        class: CLASS_INVALID,
        enabled: view.input_invalid,
    });

    cmds.push(PageCommand::MarkActiveOption {
        option: view.active_option.clone(),
    });

    cmds.push(PageCommand::SetVisible {
        target: RESULTS_WRAPPER,
        visible: view.results_visible,
    });
    cmds.push(PageCommand::SetHtml {
        target: RESULTS_CONTAINER,
        html: render_pane(&view.results, CardList::Results),
    });

    cmds.extend(render_saved(&view.saved));

    cmds.push(PageCommand::SetText {
        target: TOGGLE_AI_BUTTON,
        text: view.toggle_label.to_string(),
    });
    cmds.push(PageCommand::SetHtml {
        target: AI_RESULTS_CONTAINER,
        html: render_pane(&view.suggestions, CardList::Suggestions),
    });

    cmds.push(PageCommand::SetHtml {
        target: NOTIFICATIONS,
        html: view
            .notifications
            .iter()
            .map(markup::notification)
            .collect(),
    });

    cmds
}

fn render_pane(pane: &Pane, list: CardList) -> String {
    let (loading, empty) = match list {
        CardList::Results => (GENERATING_TEXT, NO_RESULTS_TEXT),
        CardList::Suggestions => (LOADING_SUGGESTIONS_TEXT, NO_SUGGESTIONS_TEXT),
    };
    match pane {
        Pane::Idle => String::new(),
        Pane::Loading => markup::placeholder(loading),
        Pane::Empty => markup::placeholder(empty),
        Pane::Cards(cards) => cards
            .iter()
            .enumerate()
            .map(|(index, card)| render_card(card, list, index))
            .collect(),
    }
}

fn render_card(card: &Card, list: CardList, index: usize) -> String {
    match list {
        CardList::Results => markup::result_card(card, CardRef::results(index)),
        CardList::Suggestions => markup::suggestion_card(card, CardRef::suggestions(index)),
    }
}

fn render_saved(saved: &[String]) -> Vec<PageCommand> {
    let empty = saved.is_empty();
    vec![
        PageCommand::SetVisible {
            target: SAVED_PLACEHOLDER,
            visible: empty,
        },
        PageCommand::SetVisible {
            target: SAVED_LIST,
            visible: !empty,
        },
        PageCommand::SetHtml {
            target: SAVED_LIST,
            html: saved.iter().map(|query| markup::saved_row(query)).collect(),
        },
    ]
}
