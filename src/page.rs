use tracing::debug;

use crate::derive::{DerivationMemo, Derived};
use crate::loader::{ChallengeLoader, LoadState};
use crate::models::{CategorySet, Challenge, PersistedPreferences};
use crate::notify::Notifier;
use crate::source::ChallengeSource;
use crate::store::PreferencesStore;
use crate::tracker::SolveTracker;

/// Owns all state behind the challenge board.
///
/// Every mutation of the filters writes the preferences back to the store.
/// The solved set lives only as long as the page does.
pub struct ChallengePage<S: PreferencesStore> {
    store: S,
    categories: CategorySet,
    show_solved: bool,
    loader: ChallengeLoader,
    tracker: SolveTracker,
    memo: DerivationMemo,
}

impl<S: PreferencesStore> ChallengePage<S> {
    pub fn mount(store: S) -> Self {
        let prefs = store.load();
        debug!(
            categories = prefs.categories.len(),
            show_solved = prefs.show_solved,
            "page mounted"
        );
        Self {
            store,
            categories: prefs.categories,
            show_solved: prefs.show_solved,
            loader: ChallengeLoader::new(),
            tracker: SolveTracker::new(),
            memo: DerivationMemo::new(),
        }
    }

    /// One-shot load; a no-op once the loader has reached a terminal state.
    pub fn load(&mut self, source: &dyn ChallengeSource, notifier: &dyn Notifier) {
        if self.loader.fetch_once(source, notifier, &mut self.categories) {
            self.persist();
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.loader.state()
    }

    pub fn challenges(&self) -> &[Challenge] {
        self.loader.challenges().unwrap_or(&[])
    }

    pub fn find(&self, id: &str) -> Option<&Challenge> {
        self.challenges().iter().find(|c| c.id == id)
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn show_solved(&self) -> bool {
        self.show_solved
    }

    pub fn set_show_solved(&mut self, show_solved: bool) {
        self.show_solved = show_solved;
        self.persist();
    }

    pub fn toggle_show_solved(&mut self) -> bool {
        self.set_show_solved(!self.show_solved);
        self.show_solved
    }

    pub fn set_category(&mut self, name: &str, selected: bool) {
        self.categories.set(name, selected);
        self.persist();
    }

    /// Flips a category flag. An unseen name counts as unselected.
    pub fn toggle_category(&mut self, name: &str) -> bool {
        let selected = !self.categories.get(name).unwrap_or(false);
        self.set_category(name, selected);
        selected
    }

    /// Drops every selection and the show-solved flag. Category keys stay.
    pub fn reset_preferences(&mut self) {
        self.categories.clear_selection();
        self.show_solved = false;
        self.persist();
    }

    pub fn mark_solved(&mut self, id: &str) {
        self.tracker.mark_solved(id);
    }

    pub fn is_solved(&self, id: &str) -> bool {
        self.tracker.is_solved(id)
    }

    pub fn derived(&mut self) -> &Derived {
        let challenges = self.loader.challenges().unwrap_or(&[]);
        self.memo.get(
            challenges,
            &self.categories,
            self.show_solved,
            self.tracker.ids(),
        )
    }

    pub fn preferences(&self) -> PersistedPreferences {
        PersistedPreferences::new(self.categories.clone(), self.show_solved)
    }

    fn persist(&self) {
        self.store.save(&self.preferences());
    }
}
