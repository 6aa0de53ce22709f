use std::fmt;

/// Page context the controller runs in. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Podcasts,
    AudioDramas,
}

impl Mode {
    /// Label sent verbatim on every backend request.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Podcasts => "podcasts",
            Mode::AudioDramas => "audio dramas",
        }
    }

    /// Parses an explicit mode attribute. Blank or unknown values yield `None`.
    pub fn from_attribute(raw: &str) -> Option<Mode> {
        match raw.trim() {
            "podcasts" => Some(Mode::Podcasts),
            "audio dramas" | "audio-dramas" => Some(Mode::AudioDramas),
            _ => None,
        }
    }

    /// Resolves the session mode: the attribute wins, otherwise the path hint
    /// selects audio dramas when it mentions `audio`.
    pub fn resolve(attribute: Option<&str>, path: &str) -> Mode {
        if let Some(mode) = attribute.and_then(Mode::from_attribute) {
            return mode;
        }
        if path.contains("audio") {
            Mode::AudioDramas
        } else {
            Mode::Podcasts
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
