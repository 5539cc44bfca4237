// Snapshot sources
//
// The fetch collaborator: one blocking round trip that yields a decoded
// Snapshot or a FetchError. No retries or caching live here.

use super::Snapshot;
use chrono::Utc;
use std::time::Duration;
use thiserror::Error;

/// Bundled feed document served by the fixture source
const FIXTURE_DOCUMENT: &str = include_str!("fixture.json");

const USER_AGENT: &str = concat!("vatsim-cli/", env!("CARGO_PKG_VERSION"));

/// Failure to obtain a decoded snapshot
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client could not be built: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("feed body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Refresh stage that failed, for the exit diagnostic
    pub fn stage(&self) -> &'static str {
        match self {
            FetchError::Client(_) | FetchError::Transport { .. } | FetchError::Status { .. } => {
                "fetch"
            }
            FetchError::Decode(_) => "decode",
        }
    }
}

/// Anything that can produce a fresh Snapshot
///
/// Implementations run on the fetch worker thread, so they must be `Send`.
pub trait SnapshotSource: Send {
    fn fetch(&self) -> Result<Snapshot, FetchError>;

    /// Short label shown in the status bar
    fn describe(&self) -> String;
}

/// Live feed over HTTPS
pub struct HttpSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        Self::with_user_agent(url, timeout, USER_AGENT)
    }

    pub fn with_user_agent(
        url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl SnapshotSource for HttpSource {
    fn fetch(&self) -> Result<Snapshot, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        // Read the whole body first so transport and decode failures stay distinct
        let body = response.bytes().map_err(transport)?;
        let snapshot = Snapshot::from_json(&body)?;

        tracing::debug!(
            url = %self.url,
            bytes = body.len(),
            pilots = snapshot.pilots.len(),
            controllers = snapshot.controllers.len(),
            "Fetched feed snapshot"
        );

        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Static stand-in for the live feed
///
/// Serves the bundled document with its timestamp moved to the time of
/// each fetch, so the countdown runs as it would against the live feed.
pub struct FixtureSource {
    snapshot: Snapshot,
}

impl FixtureSource {
    pub fn bundled() -> Result<Self, FetchError> {
        Ok(Self::new(Snapshot::from_json(FIXTURE_DOCUMENT.as_bytes())?))
    }

    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotSource for FixtureSource {
    fn fetch(&self) -> Result<Snapshot, FetchError> {
        let mut snapshot = self.snapshot.clone();
        snapshot.general.update_timestamp = Utc::now();
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        "demo data".to_string()
    }
}
