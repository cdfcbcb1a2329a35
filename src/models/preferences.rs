use serde::{Deserialize, Serialize};

use super::categories::CategorySet;

/// The only page state that survives between sessions.
///
/// Unknown fields are ignored so older blobs carrying `problems` or `solveIDs`
/// still load; those are never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPreferences {
    #[serde(default)]
    pub categories: CategorySet,
    #[serde(default)]
    pub show_solved: bool,
}

impl PersistedPreferences {
    pub fn new(categories: CategorySet, show_solved: bool) -> Self {
        Self {
            categories,
            show_solved,
        }
    }
}
