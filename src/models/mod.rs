pub mod categories;
pub mod challenge;
pub mod preferences;

pub use categories::CategorySet;
pub use challenge::Challenge;
pub use preferences::PersistedPreferences;
