// Info panel rendering module
//
// Next update time, countdown, network counters and controller
// connections per rating.

use super::clock::{format_countdown, DisplayClock};
use crate::app::AppState;
use crate::stats::RatingCode;
use crate::theme::{count_color, countdown_color, ACCENT, BODY_TEXT, INFO_BORDER, MUTED};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_info_panel(f: &mut Frame, area: Rect, app: &AppState, clock: &DisplayClock) {
    let paragraph = Paragraph::new(info_lines(app, clock)).block(
        Block::default()
            .title(Span::styled(
                " Network ",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(INFO_BORDER)),
    );

    f.render_widget(paragraph, area);
}

fn info_lines(app: &AppState, clock: &DisplayClock) -> Vec<Line<'static>> {
    let summary = &app.summary;
    let snapshot = app.snapshot();
    let label = Style::default().fg(MUTED);
    let body = Style::default().fg(BODY_TEXT);

    let remaining = app.countdown();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Next update: ", label),
            Span::styled(clock.short_time(app.next_refresh_at), body),
            Span::styled("  in ", label),
            Span::styled(
                format_countdown(remaining),
                Style::default()
                    .fg(countdown_color(remaining))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Feed generated: ", label),
            Span::styled(clock.short_time(summary.generated_at), body),
        ]),
        Line::from(vec![
            Span::styled("Clients: ", label),
            Span::styled(summary.connected_clients.to_string(), body),
            Span::styled("  Unique users: ", label),
            Span::styled(summary.unique_users.to_string(), body),
        ]),
        Line::from(vec![
            Span::styled("Pilots: ", label),
            Span::styled(summary.pilots.to_string(), body),
            Span::styled("  Controllers: ", label),
            Span::styled(summary.controllers.to_string(), body),
            Span::styled("  ATIS: ", label),
            Span::styled(snapshot.atis.len().to_string(), body),
            Span::styled("  Prefiles: ", label),
            Span::styled(snapshot.prefiles.len().to_string(), body),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Controller connections by rating ({}):", summary.ratings.total()),
            Style::default().fg(ACCENT),
        )),
    ];

    for (code, count) in summary.ratings.iter() {
        lines.push(Line::from(vec![
            Span::styled(rating_label(code), body),
            Span::styled(
                format!("[{count}]"),
                Style::default().fg(count_color(count)),
            ),
        ]));
    }

    lines
}

fn rating_label(code: RatingCode) -> String {
    format!("  {code:<4}")
}
