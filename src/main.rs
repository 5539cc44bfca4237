// vatsim-cli - live VATSIM network statistics in the terminal
// Polls the public data feed and keeps rating counts and airfield rankings current

mod app;
mod feed;
mod stats;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{
    config::{FETCH_TIMEOUT, TICK_INTERVAL},
    sources::{event_channel, spawn_input_thread, spawn_ticker, FetchWorker},
    AppEvent, AppState, FeedConfig, Next, RefreshError,
};
use chrono::Utc;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use feed::source::{FixtureSource, HttpSource, SnapshotSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{mpsc::Receiver, Mutex};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use ui::clock::DisplayClock;

fn main() -> Result<()> {
    let config = FeedConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }

    let source: Box<dyn SnapshotSource> = if config.demo {
        Box::new(FixtureSource::bundled()?)
    } else {
        Box::new(HttpSource::new(config.feed_url.as_str(), FETCH_TIMEOUT)?)
    };
    tracing::info!(source = %source.describe(), "Starting vatsim-cli");

    // First snapshot before touching the terminal, so a failure prints cleanly
    let first = source.fetch().map_err(RefreshError::from)?;
    let mut app = AppState::new(first, config.policy.clone(), source.describe(), Utc::now())?;
    let clock = DisplayClock::utc();

    let (events_tx, events) = event_channel();
    spawn_input_thread(events_tx.clone())?;
    spawn_ticker(events_tx.clone(), TICK_INTERVAL)?;
    let fetcher = FetchWorker::spawn(source, events_tx)?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;
    app.set_viewport(size.width, size.height);

    // Run app
    let res = run_app(&mut terminal, &mut app, &events, &fetcher, &clock);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "vatsim-cli stopped");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    events: &Receiver<AppEvent>,
    fetcher: &FetchWorker,
    clock: &DisplayClock,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, clock))?;

        let event = events.recv().context("all event sources stopped")?;
        match app.handle_event(event, Utc::now())? {
            Next::Render => {}
            Next::Fetch => fetcher.request()?,
            Next::Exit => return Ok(()),
        }
    }
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
