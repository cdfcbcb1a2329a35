#[derive(Debug, thiserror::Error)]
pub enum ChallsError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    #[error("Unknown challenge: '{0}'")]
    UnknownChallenge(String),

    #[error("No challenge source configured. Use --source, CHALLS_SOURCE or `challs config --set-source`")]
    NoSource,
}

pub type Result<T> = std::result::Result<T, ChallsError>;
