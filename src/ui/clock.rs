// Display time formatting
//
// Times are kept in UTC everywhere else; the display offset is applied
// only here, and the clock is passed into the draw call explicitly.

use chrono::{DateTime, Duration as TimeDelta, FixedOffset, Offset, Utc};

/// Formats timestamps in a fixed display offset
#[derive(Debug, Clone, Copy)]
pub struct DisplayClock {
    offset: FixedOffset,
}

impl DisplayClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Long form for the title bar, e.g. "Sat, 09 Mar 2024 14:20:00 +00:00"
    pub fn title_time(&self, time: DateTime<Utc>) -> String {
        time.with_timezone(&self.offset)
            .format("%a, %d %b %Y %H:%M:%S %:z")
            .to_string()
    }

    /// Short form for the next update, e.g. "09 Mar 24 14:25 +00:00"
    pub fn short_time(&self, time: DateTime<Utc>) -> String {
        time.with_timezone(&self.offset)
            .format("%d %b %y %H:%M %:z")
            .to_string()
    }
}

/// "mm:ss", clamped at zero
pub fn format_countdown(remaining: TimeDelta) -> String {
    let secs = remaining.num_seconds().max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
