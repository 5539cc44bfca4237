// Theme module - color palette and state colors
//
// Panel borders and text follow the classic vatsim-cli look: magenta info
// panel, green rankings table, cyan body text.

use chrono::Duration as TimeDelta;
use ratatui::style::Color;

/// Info panel border
pub const INFO_BORDER: Color = Color::Magenta;

/// Rankings table border and healthy indicators
pub const RANKING_BORDER: Color = Color::Green;

/// Body text in both panels
pub const BODY_TEXT: Color = Color::Cyan;

/// Titles and key hints
/// RGB: (187, 154, 247)
pub const ACCENT: Color = Color::Rgb(187, 154, 247);

/// Countdown close to zero, fetch in progress
/// RGB: (255, 158, 100)
pub const WARNING: Color = Color::Rgb(255, 158, 100);

/// Quit hint
/// RGB: (247, 118, 142)
pub const ALERT: Color = Color::Rgb(247, 118, 142);

/// Healthy countdown, non-zero counts
/// RGB: (158, 206, 106)
pub const HEALTHY: Color = Color::Rgb(158, 206, 106);

/// Zero counts and placeholders
pub const MUTED: Color = Color::DarkGray;

/// Countdown under this many seconds is shown as imminent
const IMMINENT_SECS: i64 = 30;

/// Color for the refresh countdown: WARNING when the refresh is imminent
pub fn countdown_color(remaining: TimeDelta) -> Color {
    if remaining.num_seconds() < IMMINENT_SECS {
        WARNING
    } else {
        HEALTHY
    }
}

/// Color for a per-rating connection count
pub fn count_color(count: u32) -> Color {
    if count == 0 {
        MUTED
    } else {
        BODY_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_color() {
        assert_eq!(countdown_color(TimeDelta::minutes(4)), HEALTHY);
        assert_eq!(countdown_color(TimeDelta::seconds(30)), HEALTHY);
        assert_eq!(countdown_color(TimeDelta::seconds(29)), WARNING);
        assert_eq!(countdown_color(TimeDelta::zero()), WARNING);
    }

    #[test]
    fn test_count_color() {
        assert_eq!(count_color(0), MUTED);
        assert_eq!(count_color(3), BODY_TEXT);
    }
}
