// Status Bar rendering module
//
// Renders the bottom status bar with key hints and the refresh state.

use crate::app::{AppState, FetchReason, Phase};
use crate::theme::{ACCENT, ALERT, HEALTHY, MUTED, WARNING};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let hints = [("q:", "Quit | ", ALERT), ("r:", "Refresh | ", ACCENT)];

    let mut spans = vec![Span::raw(" ")];
    for (key, desc, color) in hints {
        spans.push(Span::styled(
            key,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(desc));
    }
    spans.push(refresh_state(app));

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(ACCENT)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

/// Refresh indicator: fetch in flight, or the source in use
pub fn refresh_state(app: &AppState) -> Span<'static> {
    let (text, color): (String, Color) = match (app.phase, app.in_flight) {
        (Phase::Fetching, Some(FetchReason::Manual)) => ("Refreshing...".to_string(), WARNING),
        (Phase::Fetching, _) => ("Fetching update...".to_string(), WARNING),
        (Phase::Closed, _) => ("Closing".to_string(), MUTED),
        (Phase::Idle, _) => (format!("Source: {}", app.source_label), HEALTHY),
    };

    Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
}
