// Refresh scheduling
//
// AppState owns the current snapshot and its summary and decides, event by
// event, when a new snapshot must be fetched. It never blocks and never
// fetches by itself: it answers `Next::Fetch` and the loop hands the work
// to the fetch worker, whose result comes back as another event.

pub mod config;
pub mod error;
pub mod event;
pub mod sources;

pub use config::{FeedConfig, LayoutMode, RefreshPolicy};
pub use error::RefreshError;
pub use event::{AppEvent, Command};

use crate::feed::{source::FetchError, Snapshot};
use crate::stats::Summary;
use chrono::{DateTime, Duration as TimeDelta, Utc};

/// Scheduler lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the current panels, waiting for the next event
    Idle,
    /// A fetch is running on the worker
    Fetching,
    /// Quit was requested
    Closed,
}

/// What the loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Render,
    /// Start a fetch on the worker, then render
    Fetch,
    Exit,
}

/// Why the running fetch was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchReason {
    Scheduled,
    Manual,
}

/// Main application state
pub struct AppState {
    /// Current lifecycle phase
    pub phase: Phase,

    /// Most recent good snapshot
    snapshot: Snapshot,

    /// Aggregated view of `snapshot`
    pub summary: Summary,

    /// Feed timestamp plus the refresh interval
    pub next_refresh_at: DateTime<Utc>,

    /// Wall clock as of the last handled event
    pub now: DateTime<Utc>,

    /// Terminal size (columns, rows) from the last resize
    pub viewport: (u16, u16),

    /// Panel arrangement derived from `viewport`
    pub layout: LayoutMode,

    /// Reason for the fetch in flight, if any
    pub in_flight: Option<FetchReason>,

    /// Where snapshots come from, for the status bar
    pub source_label: String,

    policy: RefreshPolicy,
}

impl AppState {
    /// Build the state around the first snapshot
    pub fn new(
        snapshot: Snapshot,
        policy: RefreshPolicy,
        source_label: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, RefreshError> {
        let summary = Summary::from_snapshot(&snapshot)?;
        let next_refresh_at = schedule_after(&policy, snapshot.generated_at(), now);

        Ok(Self {
            phase: Phase::Idle,
            snapshot,
            summary,
            next_refresh_at,
            now,
            viewport: (0, 0),
            layout: LayoutMode::default(),
            in_flight: None,
            source_label: source_label.into(),
            policy,
        })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Handle one event from the merged stream
    ///
    /// Errors are fatal: the caller restores the terminal and exits.
    pub fn handle_event(&mut self, event: AppEvent, now: DateTime<Utc>) -> Result<Next, RefreshError> {
        if self.phase == Phase::Closed {
            return Ok(Next::Exit);
        }
        self.now = now;

        match event {
            AppEvent::Tick => {
                if self.refresh_due(now) {
                    return Ok(self.begin_fetch(FetchReason::Scheduled));
                }
                Ok(Next::Render)
            }
            AppEvent::Command(Command::Refresh) => {
                if self.phase == Phase::Fetching {
                    tracing::debug!("Manual refresh ignored, fetch already in flight");
                    return Ok(Next::Render);
                }
                Ok(self.begin_fetch(FetchReason::Manual))
            }
            AppEvent::Command(Command::Quit) => {
                self.phase = Phase::Closed;
                Ok(Next::Exit)
            }
            AppEvent::Resize(width, height) => {
                self.set_viewport(width, height);
                Ok(Next::Render)
            }
            AppEvent::Fetched(Ok(snapshot)) => {
                self.apply_snapshot(snapshot, now)?;
                Ok(Next::Render)
            }
            AppEvent::Fetched(Err(e)) => Err(self.record_failure(e)),
            AppEvent::InputFailed(message) => {
                tracing::error!(error = %message, "Terminal input stopped");
                self.phase = Phase::Closed;
                Err(RefreshError::Input(message))
            }
        }
    }

    /// Record new terminal geometry; data is untouched
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.layout = LayoutMode::for_width(width);
        tracing::debug!(width, height, layout = ?self.layout, "Terminal resized");
    }

    /// Time left until the next refresh, never negative
    pub fn countdown(&self) -> TimeDelta {
        (self.next_refresh_at - self.now).max(TimeDelta::zero())
    }

    fn refresh_due(&self, now: DateTime<Utc>) -> bool {
        self.phase == Phase::Idle && now >= self.next_refresh_at
    }

    fn begin_fetch(&mut self, reason: FetchReason) -> Next {
        self.phase = Phase::Fetching;
        self.in_flight = Some(reason);
        tracing::info!(?reason, source = %self.source_label, "Fetching snapshot");
        Next::Fetch
    }

    /// Swap in a new snapshot; a fault leaves the current one in place
    fn apply_snapshot(&mut self, snapshot: Snapshot, now: DateTime<Utc>) -> Result<(), RefreshError> {
        self.phase = Phase::Idle;
        self.in_flight = None;

        let summary = Summary::from_snapshot(&snapshot)?;
        self.next_refresh_at = schedule_after(&self.policy, snapshot.generated_at(), now);
        self.summary = summary;
        self.snapshot = snapshot;

        tracing::info!(
            generated_at = %self.summary.generated_at,
            next_refresh_at = %self.next_refresh_at,
            pilots = self.summary.pilots,
            controllers = self.summary.controllers,
            "Snapshot applied"
        );
        Ok(())
    }

    /// A failed fetch ends the loop; the last good panels stay until exit
    fn record_failure(&mut self, error: FetchError) -> RefreshError {
        self.phase = Phase::Idle;
        self.in_flight = None;
        tracing::error!(error = %error, stage = error.stage(), "Fetch failed");
        error.into()
    }
}

/// Next refresh for a snapshot generated at `generated_at`
///
/// A feed whose next publish time has already passed is polled again after
/// `stale_feed_retry` instead of on every tick.
fn schedule_after(policy: &RefreshPolicy, generated_at: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let next = generated_at + policy.interval;
    if next <= now {
        now + policy.stale_feed_retry
    } else {
        next
    }
}
