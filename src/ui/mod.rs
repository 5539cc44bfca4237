// UI rendering module
//
// This module contains all UI rendering components for vatsim-cli.
// The main draw() function lays out the title bar, the two data panels
// and the status bar. Rendering only reads AppState.

mod airfields;
pub mod clock;
mod info_panel;
mod status_bar;

use crate::app::{AppState, LayoutMode};
use crate::theme::{ACCENT, BODY_TEXT};
use clock::DisplayClock;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use airfields::render_airfields;
use info_panel::render_info_panel;
use status_bar::render_status_bar;

// Below this the panels cannot hold their rows
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 16;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &AppState, clock: &DisplayClock) {
    let size = f.area();

    let (width, height) = app.viewport;
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        let notice = Paragraph::new(format!("Terminal too small ({width}x{height})"))
            .style(Style::default().fg(ACCENT))
            .alignment(Alignment::Center);
        f.render_widget(notice, size);
        return;
    }

    // Main layout: title, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_title(f, chunks[0], app, clock);

    let direction = match app.layout {
        LayoutMode::SideBySide => Direction::Horizontal,
        LayoutMode::Stacked => Direction::Vertical,
    };
    let body_chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_info_panel(f, body_chunks[0], app, clock);
    render_airfields(f, body_chunks[1], app);

    render_status_bar(f, chunks[2], app);
}

fn render_title(f: &mut Frame, area: Rect, app: &AppState, clock: &DisplayClock) {
    let title = Line::from(vec![
        Span::styled(
            "Vatsim CLI ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(clock.title_time(app.now), Style::default().fg(BODY_TEXT)),
    ]);

    let bar = Paragraph::new(title)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(ACCENT)),
        )
        .alignment(Alignment::Center);

    f.render_widget(bar, area);
}
