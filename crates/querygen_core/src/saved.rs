#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

/// Session-only saved queries: insertion ordered, unique by exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedCollection {
    items: Vec<String>,
}

impl SavedCollection {
    pub fn save(&mut self, query: &str) -> SaveOutcome {
        if self.items.iter().any(|item| item == query) {
            return SaveOutcome::AlreadySaved;
        }
        self.items.push(query.to_string());
        SaveOutcome::Saved
    }

    /// Removes every entry equal to `query`. Returns how many were dropped,
    /// which is zero for a non-member.
    pub fn remove(&mut self, query: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item != query);
        before - self.items.len()
    }

    pub fn list(&self) -> &[String] {
        &self.items
    }
}
