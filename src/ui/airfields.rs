// Airfield rankings table
//
// Shows the top departures and arrivals side by side. The two rankings
// are windowed independently; a shorter one leaves blank cells.

use crate::app::config::RANKING_ROWS;
use crate::app::AppState;
use crate::stats::AirfieldCount;
use crate::theme::{ACCENT, BODY_TEXT, MUTED, RANKING_BORDER};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
    Frame,
};

/// One table row: departure cell, arrival cell
pub type RankingRow<'a> = (Option<&'a AirfieldCount>, Option<&'a AirfieldCount>);

/// Pair the first `limit` entries of each ranking by position
pub fn ranking_rows<'a>(
    departures: &'a [AirfieldCount],
    arrivals: &'a [AirfieldCount],
    limit: usize,
) -> Vec<RankingRow<'a>> {
    let rows = departures.len().max(arrivals.len()).min(limit);
    (0..rows)
        .map(|i| (departures.get(i), arrivals.get(i)))
        .collect()
}

pub fn render_airfields(f: &mut Frame, area: Rect, app: &AppState) {
    let airfields = &app.summary.airfields;
    let rows: Vec<Row> = ranking_rows(&airfields.departures, &airfields.arrivals, RANKING_ROWS)
        .into_iter()
        .map(|(departure, arrival)| Row::new(vec![airfield_cell(departure), airfield_cell(arrival)]))
        .collect();

    let empty = rows.is_empty();
    let header = Row::new(vec!["Departures", "Arrivals"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let mut table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .header(header)
        .style(Style::default().fg(BODY_TEXT))
        .block(
            Block::default()
                .title(Span::styled(
                    " Most Popular Airfields ",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(RANKING_BORDER)),
        );

    if empty {
        table = table.footer(
            Row::new(vec![Cell::from("No flight plans filed")]).style(Style::default().fg(MUTED)),
        );
    }

    f.render_widget(table, area);
}

fn airfield_cell(entry: Option<&AirfieldCount>) -> Cell<'static> {
    match entry {
        Some(airfield) => Cell::from(format!("{}: {}", display_icao(&airfield.icao), airfield.count)),
        None => Cell::from(""),
    }
}

/// Flight plans can be filed without an airport
fn display_icao(icao: &str) -> &str {
    if icao.trim().is_empty() {
        "----"
    } else {
        icao
    }
}
