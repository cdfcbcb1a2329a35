use tracing::{debug, info};

use crate::models::{CategorySet, Challenge};
use crate::notify::Notifier;
use crate::source::ChallengeSource;

/// `Pending` moves to exactly one of the other two and stays there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    NotStarted,
    /// `empty` is set when the source answered with no data set at all,
    /// as opposed to an empty list.
    Loaded { empty: bool },
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Pending)
    }
}

#[derive(Debug)]
pub struct ChallengeLoader {
    state: LoadState,
    challenges: Option<Vec<Challenge>>,
}

impl Default for ChallengeLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeLoader {
    pub fn new() -> Self {
        Self {
            state: LoadState::Pending,
            challenges: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Raw challenge list, `None` until a non-empty load completed.
    pub fn challenges(&self) -> Option<&[Challenge]> {
        self.challenges.as_deref()
    }

    /// Fetches once and applies the result. Returns true if `categories`
    /// gained any key.
    ///
    /// Once the state has left `Pending` the source is not consulted again.
    /// A fetch error is reported through `notifier` and leaves the loader
    /// pending; there is no retry.
    pub fn fetch_once(
        &mut self,
        source: &dyn ChallengeSource,
        notifier: &dyn Notifier,
        categories: &mut CategorySet,
    ) -> bool {
        if self.state.is_terminal() {
            debug!(state = ?self.state, "challenges already loaded, skipping fetch");
            return false;
        }

        let response = source.fetch();

        if response.not_started {
            info!("contest has not started");
            self.state = LoadState::NotStarted;
            return false;
        }

        if let Some(error) = response.error {
            notifier.error(&error);
            return false;
        }

        let Some(challenges) = response.data else {
            info!("source returned no challenge data");
            self.state = LoadState::Loaded { empty: true };
            return false;
        };

        let mut grew = false;
        for challenge in &challenges {
            grew |= categories.observe(&challenge.category);
        }

        info!(
            challenges = challenges.len(),
            categories = categories.len(),
            "challenges loaded"
        );
        self.challenges = Some(challenges);
        self.state = LoadState::Loaded { empty: false };
        grew
    }
}
