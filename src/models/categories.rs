use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category name to "explicitly selected" flag.
///
/// Keys are only ever added, never removed, for the lifetime of a page.
/// Iteration is ordered by category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(BTreeMap<String, bool>);

impl CategorySet {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a category seen in the data. Returns true if the key is new.
    pub fn observe(&mut self, name: &str) -> bool {
        if self.0.contains_key(name) {
            return false;
        }
        self.0.insert(name.to_string(), false);
        true
    }

    pub fn set(&mut self, name: &str, selected: bool) {
        self.0.insert(name.to_string(), selected);
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Whether at least one category has been switched on.
    pub fn any_selected(&self) -> bool {
        self.0.values().any(|&selected| selected)
    }

    /// Clears every flag, keeping the keys.
    pub fn clear_selection(&mut self) {
        for selected in self.0.values_mut() {
            *selected = false;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, &selected)| (name.as_str(), selected))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for CategorySet {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_inserts_unselected_once() {
        let mut set = CategorySet::new();
        assert!(set.observe("web"));
        assert!(!set.observe("web"));
        assert_eq!(set.get("web"), Some(false));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_observe_keeps_existing_flag() {
        let mut set = CategorySet::new();
        set.set("pwn", true);
        assert!(!set.observe("pwn"));
        assert_eq!(set.get("pwn"), Some(true));
    }

    #[test]
    fn test_any_selected() {
        let mut set: CategorySet = [("web", false), ("pwn", false)].into_iter().collect();
        assert!(!set.any_selected());
        set.set("pwn", true);
        assert!(set.any_selected());
        set.clear_selection();
        assert!(!set.any_selected());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_iter_sorted_by_name() {
        let set: CategorySet = [("web", false), ("crypto", true), ("misc", false)]
            .into_iter()
            .collect();
        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["crypto", "misc", "web"]);
    }
}
