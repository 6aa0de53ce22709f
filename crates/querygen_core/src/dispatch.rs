//! Delegated action dispatch for rendered cards.
//!
//! Rendered controls carry `data-action`, `data-payload` and optionally
//! `data-source`. The host forwards those attributes verbatim and
//! [`dispatch`] turns them into a [`Msg`].

use std::fmt;
use std::str::FromStr;

use querygen_logging::qg_warn;

use crate::Msg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardList {
    Results,
    Suggestions,
}

/// Position of a rendered card, used to relabel its save control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRef {
    pub list: CardList,
    pub index: usize,
}

impl CardRef {
    pub fn results(index: usize) -> Self {
        Self {
            list: CardList::Results,
            index,
        }
    }

    pub fn suggestions(index: usize) -> Self {
        Self {
            list: CardList::Suggestions,
            index,
        }
    }
}

impl fmt::Display for CardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = match self.list {
            CardList::Results => "results",
            CardList::Suggestions => "suggestions",
        };
        write!(f, "{list}:{}", self.index)
    }
}

impl FromStr for CardRef {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (list, index) = raw.split_once(':').ok_or(())?;
        let list = match list {
            "results" => CardList::Results,
            "suggestions" => CardList::Suggestions,
            _ => return Err(()),
        };
        let index = index.parse().map_err(|_| ())?;
        Ok(Self { list, index })
    }
}

/// Maps a delegated `(action, payload, source)` triple to a message.
pub fn dispatch(action: &str, payload: String, source: Option<&str>) -> Msg {
    match action {
        "copy" => Msg::CopyClicked(payload),
        "save" => Msg::SaveClicked {
            query: payload,
            source: source.and_then(|raw| raw.parse().ok()),
        },
        "remove" => Msg::RemoveClicked(payload),
        other => {
            qg_warn!("Ignoring unknown card action {:?}", other);
            Msg::NoOp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_ref_display_parses_back() {
        let card = CardRef::suggestions(11);
        assert_eq!(card.to_string(), "suggestions:11");
        assert_eq!("suggestions:11".parse::<CardRef>(), Ok(card));
    }

    #[test]
    fn malformed_sources_are_rejected() {
        assert!("results".parse::<CardRef>().is_err());
        assert!("saved:1".parse::<CardRef>().is_err());
        assert!("results:-1".parse::<CardRef>().is_err());
    }

    #[test]
    fn save_keeps_payload_verbatim_and_drops_bad_source() {
        let msg = dispatch("save", " It's <b> ".to_string(), Some("nowhere"));
        assert_eq!(
            msg,
            Msg::SaveClicked {
                query: " It's <b> ".to_string(),
                source: None,
            }
        );
    }

    #[test]
    fn known_actions_route_to_messages() {
        assert_eq!(
            dispatch("copy", "q".to_string(), None),
            Msg::CopyClicked("q".to_string())
        );
        assert_eq!(
            dispatch("remove", "q".to_string(), Some("results:0")),
            Msg::RemoveClicked("q".to_string())
        );
        assert_eq!(dispatch("explode", "q".to_string(), None), Msg::NoOp);
    }
}
