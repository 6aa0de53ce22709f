use crate::Mode;

const BASE_TOPICS: [&str; 6] = [
    "true crime",
    "daily news",
    "tech trends",
    "history bites",
    "mindfulness",
    "startup stories",
];

pub const MAX_SUGGESTIONS: usize = 12;

/// Suggestions synthesised without the backend: each base topic followed by
/// the topic suffixed with the mode label.
pub fn local_suggestions(mode: Mode) -> Vec<String> {
    BASE_TOPICS
        .iter()
        .flat_map(|topic| [topic.to_string(), format!("{topic} {}", mode.label())])
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_plain_and_suffixed_topics() {
        let list = local_suggestions(Mode::Podcasts);
        assert_eq!(list[0], "true crime");
        assert_eq!(list[1], "true crime podcasts");
        assert_eq!(list[11], "startup stories podcasts");
    }

    #[test]
    fn capped_at_maximum() {
        assert_eq!(local_suggestions(Mode::AudioDramas).len(), MAX_SUGGESTIONS);
    }
}
