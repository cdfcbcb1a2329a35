#[cfg(test)]
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::get_config_dir;
use crate::error::Result;
use crate::models::PersistedPreferences;

const PREFERENCES_FILE: &str = "chall_page_state.json";

/// Durable home of the page preferences.
///
/// Neither method may fail towards the caller: a broken blob reads as the
/// defaults and a failed write is only logged.
pub trait PreferencesStore {
    fn load(&self) -> PersistedPreferences;
    fn save(&self, prefs: &PersistedPreferences);
}

pub fn default_preferences_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(PREFERENCES_FILE))
}

#[derive(Debug, Clone)]
pub struct FilePreferencesStore {
    path: PathBuf,
}

impl FilePreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write(&self, prefs: &PersistedPreferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(prefs)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PreferencesStore for FilePreferencesStore {
    fn load(&self) -> PersistedPreferences {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no stored preferences");
                return PersistedPreferences::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "discarding malformed preferences");
                PersistedPreferences::default()
            }
        }
    }

    fn save(&self, prefs: &PersistedPreferences) {
        if let Err(e) = self.write(prefs) {
            warn!(path = %self.path.display(), error = %e, "failed to save preferences");
        }
    }
}

/// Keeps the serialized blob in memory. Stores the JSON text rather than the
/// struct so it goes through the same decode path as the file store.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreferencesStore {
    blob: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryPreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

#[cfg(test)]
impl PreferencesStore for MemoryPreferencesStore {
    fn load(&self) -> PersistedPreferences {
        self.blob
            .borrow()
            .as_deref()
            .and_then(|blob| serde_json::from_str(blob).ok())
            .unwrap_or_default()
    }

    fn save(&self, prefs: &PersistedPreferences) {
        match serde_json::to_string(prefs) {
            Ok(blob) => *self.blob.borrow_mut() = Some(blob),
            Err(e) => warn!(error = %e, "failed to serialize preferences"),
        }
    }
}

impl<T: PreferencesStore + ?Sized> PreferencesStore for &T {
    fn load(&self) -> PersistedPreferences {
        (**self).load()
    }

    fn save(&self, prefs: &PersistedPreferences) {
        (**self).save(prefs)
    }
}
