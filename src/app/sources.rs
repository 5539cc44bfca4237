// Event source threads
//
// Input, ticker and fetch worker each run on their own thread and push into
// one mpsc channel. The main loop is the only receiver, so events are
// handled strictly in arrival order and only the loop touches AppState.

use super::event::{command_for_key, AppEvent};
use crate::feed::source::SnapshotSource;
use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Create the channel every source feeds into
pub fn event_channel() -> (Sender<AppEvent>, Receiver<AppEvent>) {
    mpsc::channel()
}

/// Forward key presses and resizes from the terminal
///
/// A read failure is forwarded as `AppEvent::InputFailed` and ends the thread.
pub fn spawn_input_thread(events: Sender<AppEvent>) -> Result<()> {
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || loop {
            let read = event::read();
            let failed = read.is_err();
            if let Some(app_event) = input_event(read) {
                if events.send(app_event).is_err() {
                    return;
                }
            }
            if failed {
                return;
            }
        })
        .context("failed to spawn input thread")?;
    Ok(())
}

/// Translate one terminal read into the event the loop sees, if any
fn input_event(read: io::Result<Event>) -> Option<AppEvent> {
    match read {
        Ok(Event::Key(key)) => command_for_key(key).map(AppEvent::Command),
        Ok(Event::Resize(width, height)) => Some(AppEvent::Resize(width, height)),
        Ok(_) => None,
        Err(e) => Some(AppEvent::InputFailed(e.to_string())),
    }
}

/// Emit a tick every `interval` until the loop goes away
pub fn spawn_ticker(events: Sender<AppEvent>, interval: Duration) -> Result<()> {
    thread::Builder::new()
        .name("ticker".to_string())
        .spawn(move || loop {
            thread::sleep(interval);
            if events.send(AppEvent::Tick).is_err() {
                return;
            }
        })
        .context("failed to spawn ticker thread")?;
    Ok(())
}

/// Handle for asking the fetch worker for a new snapshot
pub struct FetchWorker {
    requests: Sender<()>,
}

impl FetchWorker {
    /// Start the worker; each request runs one fetch and reports back as
    /// `AppEvent::Fetched`
    pub fn spawn(source: Box<dyn SnapshotSource>, events: Sender<AppEvent>) -> Result<Self> {
        let (requests, pending) = mpsc::channel::<()>();

        thread::Builder::new()
            .name("fetch".to_string())
            .spawn(move || {
                while pending.recv().is_ok() {
                    let result = source.fetch();
                    if events.send(AppEvent::Fetched(result)).is_err() {
                        return;
                    }
                }
            })
            .context("failed to spawn fetch worker")?;

        Ok(Self { requests })
    }

    pub fn request(&self) -> Result<()> {
        self.requests
            .send(())
            .context("fetch worker is no longer running")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::source::{FetchError, FixtureSource};
    use crate::feed::Snapshot;

    struct FailingSource;

    impl SnapshotSource for FailingSource {
        fn fetch(&self) -> Result<Snapshot, FetchError> {
            Err(FetchError::Status {
                url: "https://example.invalid".to_string(),
                status: 500,
            })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn test_fetch_worker_reports_back_as_event() {
        let (tx, rx) = event_channel();
        let worker = FetchWorker::spawn(Box::new(FixtureSource::bundled().unwrap()), tx).unwrap();

        worker.request().unwrap();

        match rx.recv_timeout(WAIT).unwrap() {
            AppEvent::Fetched(Ok(snapshot)) => assert_eq!(snapshot.pilots.len(), 6),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_fetch_worker_forwards_errors() {
        let (tx, rx) = event_channel();
        let worker = FetchWorker::spawn(Box::new(FailingSource), tx).unwrap();

        worker.request().unwrap();
        worker.request().unwrap();

        for _ in 0..2 {
            match rx.recv_timeout(WAIT).unwrap() {
                AppEvent::Fetched(Err(err)) => assert_eq!(err.stage(), "fetch"),
                other => panic!("unexpected event: {other:?}"),
            }
        }
    }

    #[test]
    fn test_input_read_failure_becomes_event() {
        let read = Err(io::Error::new(io::ErrorKind::Other, "not a terminal"));

        match input_event(read) {
            Some(AppEvent::InputFailed(message)) => assert_eq!(message, "not a terminal"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_input_keys_and_resizes_are_forwarded() {
        use crate::app::Command;
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let quit = Ok(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(matches!(input_event(quit), Some(AppEvent::Command(Command::Quit))));

        let other = Ok(Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)));
        assert!(input_event(other).is_none());

        assert!(matches!(
            input_event(Ok(Event::Resize(90, 30))),
            Some(AppEvent::Resize(90, 30))
        ));
        assert!(input_event(Ok(Event::FocusGained)).is_none());
    }

    #[test]
    fn test_ticker_emits_ticks() {
        let (tx, rx) = event_channel();
        spawn_ticker(tx, Duration::from_millis(10)).unwrap();

        for _ in 0..3 {
            assert!(matches!(rx.recv_timeout(WAIT).unwrap(), AppEvent::Tick));
        }
    }
}
