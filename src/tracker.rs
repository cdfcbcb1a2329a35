use std::collections::BTreeSet;

use tracing::debug;

/// Ids of challenges solved during this session. Grows only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveTracker {
    solved: BTreeSet<String>,
}

impl SolveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent.
    pub fn mark_solved(&mut self, id: &str) {
        if self.solved.contains(id) {
            return;
        }
        debug!(id, "challenge marked solved");
        self.solved.insert(id.to_string());
    }

    pub fn is_solved(&self, id: &str) -> bool {
        self.solved.contains(id)
    }

    pub fn ids(&self) -> &BTreeSet<String> {
        &self.solved
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.solved.len()
    }
}
