// Events and keyboard handling
//
// Every event source (clock ticks, key presses, terminal resizes and
// finished fetches) is reduced to one AppEvent so the main loop can
// process them strictly one at a time.

use crate::feed::{source::FetchError, Snapshot};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User-level commands, independent of the key that produced them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Refresh,
}

/// One entry in the merged event stream
#[derive(Debug)]
pub enum AppEvent {
    /// Periodic clock tick
    Tick,
    Command(Command),
    /// New terminal size (columns, rows)
    Resize(u16, u16),
    /// Result of a fetch started earlier by the loop
    Fetched(Result<Snapshot, FetchError>),
    /// Reading the terminal failed; no more key presses will arrive
    InputFailed(String),
}

/// Map a key press to a command
///
/// # Key Bindings
/// - `q`, `Q`, `Esc`, `Ctrl-C` - Quit
/// - `r`, `R`, `Ctrl-R` - Refresh now
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Char('r') if ctrl => Some(Command::Refresh),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Refresh),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for_key(press(KeyCode::Char('Q'))), Some(Command::Quit));
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_refresh_keys() {
        assert_eq!(command_for_key(press(KeyCode::Char('r'))), Some(Command::Refresh));
        assert_eq!(command_for_key(press(KeyCode::Char('R'))), Some(Command::Refresh));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(Command::Refresh)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(command_for_key(press(KeyCode::Char('c'))), None);
        assert_eq!(command_for_key(press(KeyCode::Up)), None);
        assert_eq!(command_for_key(press(KeyCode::Tab)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(key), None);
    }
}
