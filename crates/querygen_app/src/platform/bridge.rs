//! JSON-lines protocol between the controller and the page host.
//!
//! The host writes one [`PageEvent`] per line on stdin and applies every
//! [`PageCommand`] line it reads back from stdout.

use std::io::{self, Write};

use querygen_core::{dispatch, Msg};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PageEvent {
    InputChanged {
        text: String,
    },
    OptionClicked {
        option: String,
    },
    /// A delegated click on a rendered control, carrying its data attributes.
    Action {
        action: String,
        payload: String,
        #[serde(default)]
        source: Option<String>,
    },
    PanelShown,
    PanelHidden,
    Shutdown,
}

impl PageEvent {
    pub fn into_msg(self) -> Msg {
        match self {
            PageEvent::InputChanged { text } => Msg::InputChanged(text),
            PageEvent::OptionClicked { option } => Msg::OptionClicked(option),
            PageEvent::Action {
                action,
                payload,
                source,
            } => dispatch(&action, payload, source.as_deref()),
            PageEvent::PanelShown => Msg::PanelShown,
            PageEvent::PanelHidden => Msg::PanelHidden,
            PageEvent::Shutdown => Msg::NoOp,
        }
    }
}

pub fn decode_event(line: &str) -> Result<PageEvent, serde_json::Error> {
    serde_json::from_str(line)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PageCommand {
    SetHtml {
        target: &'static str,
        html: String,
    },
    SetText {
        target: &'static str,
        text: String,
    },
    SetClass {
        target: &'static str,
        class: &'static str,
        enabled: bool,
    },
    SetVisible {
        target: &'static str,
        visible: bool,
    },
    /// Highlights the option control with this identifier and clears the rest.
    MarkActiveOption {
        option: Option<String>,
    },
}

pub fn write_commands<W: Write>(out: &mut W, commands: &[PageCommand]) -> io::Result<()> {
    for command in commands {
        serde_json::to_writer(&mut *out, command)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use querygen_core::CardRef;

    #[test]
    fn decodes_delegated_save_with_source() {
        let event = decode_event(
            r#"{"event":"action","action":"save","payload":"It's \"Q1\"","source":"results:2"}"#,
        )
        .unwrap();
        assert_eq!(
            event.into_msg(),
            Msg::SaveClicked {
                query: "It's \"Q1\"".to_string(),
                source: Some(CardRef::results(2)),
            }
        );
    }

    #[test]
    fn decodes_lifecycle_and_input_events() {
        assert_eq!(
            decode_event(r#"{"event":"panel_shown"}"#).unwrap(),
            PageEvent::PanelShown
        );
        assert_eq!(
            decode_event(r#"{"event":"input_changed","text":"  true crime "}"#)
                .unwrap()
                .into_msg(),
            Msg::InputChanged("  true crime ".to_string())
        );
        assert_eq!(
            decode_event(r#"{"event":"option_clicked","option":"2word_podcasts"}"#)
                .unwrap()
                .into_msg(),
            Msg::OptionClicked("2word_podcasts".to_string())
        );
    }

    #[test]
    fn rejects_unknown_events() {
        assert!(decode_event(r#"{"event":"scroll","y":10}"#).is_err());
        assert!(decode_event("not json").is_err());
    }

    #[test]
    fn writes_one_command_per_line() {
        let mut out = Vec::new();
        write_commands(
            &mut out,
            &[
                PageCommand::SetVisible {
                    target: "results",
                    visible: true,
                },
                PageCommand::MarkActiveOption { option: None },
            ],
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"command":"set_visible","target":"results","visible":true}"#,
                r#"{"command":"mark_active_option","option":null}"#,
            ]
        );
    }
}
