// Application configuration types
//
// This module contains:
// - Timing constants for the refresh loop
// - RefreshPolicy, the scheduler's timing rules
// - FeedConfig, read once from the environment at startup

use chrono::Duration as TimeDelta;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Public VATSIM v3 data feed
pub const DEFAULT_FEED_URL: &str = "https://data.vatsim.net/v3/vatsim-data.json";

/// The feed publishes a new document every five minutes
pub const REFRESH_INTERVAL_SECS: i64 = 5 * 60;

/// Clock tick driving the title clock and countdown
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Request timeout enforced by the HTTP source
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay before re-polling a feed whose timestamp is already overdue
pub const STALE_FEED_RETRY_SECS: i64 = 15;

/// Rows shown in each airfield ranking column
pub const RANKING_ROWS: usize = 5;

/// Minimum terminal width for panels side by side
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

// ============================================================================
// Enums
// ============================================================================

/// Arrangement of the info and ranking panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Info panel left, rankings right
    #[default]
    SideBySide,
    /// Info panel above rankings, for narrow terminals
    Stacked,
}

impl LayoutMode {
    pub fn for_width(width: u16) -> Self {
        if width >= SIDE_BY_SIDE_MIN_WIDTH {
            LayoutMode::SideBySide
        } else {
            LayoutMode::Stacked
        }
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Timing rules for the refresh scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshPolicy {
    /// Added to a snapshot's own timestamp to get the next refresh time
    pub interval: TimeDelta,

    /// Re-poll delay when the feed's timestamp is already overdue
    pub stale_feed_retry: TimeDelta,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            interval: TimeDelta::seconds(REFRESH_INTERVAL_SECS),
            stale_feed_retry: TimeDelta::seconds(STALE_FEED_RETRY_SECS),
        }
    }
}

/// Startup settings taken from the environment
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed endpoint (`VATSIM_CLI_FEED_URL`)
    pub feed_url: String,

    /// Serve bundled demo data instead of the live feed (`VATSIM_CLI_DEMO`)
    pub demo: bool,

    /// Scheduler timing
    pub policy: RefreshPolicy,

    /// Log file; logging stays off when unset (`VATSIM_CLI_LOG`)
    pub log_path: Option<PathBuf>,
}

impl FeedConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let feed_url = lookup("VATSIM_CLI_FEED_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

        let demo = lookup("VATSIM_CLI_DEMO")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let log_path = lookup("VATSIM_CLI_LOG")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            feed_url,
            demo,
            policy: RefreshPolicy::default(),
            log_path,
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
