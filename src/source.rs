use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::models::Challenge;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// What a single fetch of the challenge list produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    #[serde(default)]
    pub data: Option<Vec<Challenge>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub not_started: bool,
}

impl FetchResponse {
    pub fn data(challenges: Vec<Challenge>) -> Self {
        Self {
            data: Some(challenges),
            ..Self::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn not_started() -> Self {
        Self {
            not_started: true,
            ..Self::default()
        }
    }
}

pub trait ChallengeSource {
    fn fetch(&self) -> FetchResponse;
}

/// Picks an HTTP source for `http(s)://` URLs, a file source otherwise.
pub fn source_for(location: &str) -> Box<dyn ChallengeSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FileContents {
    List(Vec<Challenge>),
    Response(FetchResponse),
}

/// Reads challenges from a JSON file holding either a bare array or a
/// `{data, error, notStarted}` object.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<FetchResponse> {
        let contents = fs::read_to_string(&self.path)?;
        let parsed = match serde_json::from_str(&contents)? {
            FileContents::List(challenges) => FetchResponse::data(challenges),
            FileContents::Response(response) => response,
        };
        Ok(parsed)
    }
}

impl ChallengeSource for FileSource {
    fn fetch(&self) -> FetchResponse {
        debug!(path = %self.path.display(), "reading challenges");
        self.read().unwrap_or_else(|e| {
            FetchResponse::error(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }
}

/// rCTF-style `{kind, message, data}` envelope.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    kind: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Vec<Challenge>>,
}

impl From<ApiEnvelope> for FetchResponse {
    fn from(envelope: ApiEnvelope) -> Self {
        let ApiEnvelope {
            kind,
            message,
            data,
        } = envelope;
        match kind.as_str() {
            "goodChallenges" => Self {
                data,
                ..Self::default()
            },
            "badNotStarted" => Self::not_started(),
            _ => Self::error(message.unwrap_or_else(|| kind.clone())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn request(&self) -> Result<FetchResponse> {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()?;
        // Error kinds come back with 4xx statuses, so the body is decoded
        // regardless of status.
        let envelope: ApiEnvelope = client.get(&self.url).send()?.json()?;
        Ok(envelope.into())
    }
}

impl ChallengeSource for HttpSource {
    fn fetch(&self) -> FetchResponse {
        debug!(url = %self.url, "fetching challenges");
        self.request()
            .unwrap_or_else(|e| FetchResponse::error(format!("Failed to fetch challenges: {}", e)))
    }
}
