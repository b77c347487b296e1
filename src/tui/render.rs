//! Main rendering logic for TUI.
//!
//! Every frame is a full redraw from the last assembled tables; nothing
//! is diffed against prior screen contents.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};

use crate::view::{CellKind, TableData};

use super::state::{AppState, Pane, Phase};
use super::style::Styles;

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: header line, three stacked panes.
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Percentage(34),
        Constraint::Percentage(33),
        Constraint::Percentage(33),
    ])
    .split(area);

    render_header(frame, chunks[0], state);

    match &state.tables {
        Some(tables) => {
            let panes = [
                (&tables.current, Pane::CurrentStatus),
                (&tables.history, Pane::StatusHistory),
                (&tables.transmissions, Pane::Transmissions),
            ];
            for (i, (table, pane)) in panes.into_iter().enumerate() {
                render_pane(
                    frame,
                    chunks[i + 1],
                    table,
                    state.focus == pane,
                    state.scroll[pane.index()],
                );
            }
        }
        None => {
            for (i, title) in [" Current Status ", " Status History ", " Transmissions "]
                .iter()
                .enumerate()
            {
                let block = Block::default()
                    .title(*title)
                    .borders(Borders::ALL)
                    .border_style(Styles::border(false));
                let paragraph = Paragraph::new("No data yet - press r to refresh")
                    .style(Styles::dim())
                    .block(block);
                frame.render_widget(paragraph, chunks[i + 1]);
            }
        }
    }

    // Help popup overlays everything.
    if state.show_help {
        render_help(frame, area);
    }
}

/// Header line: endpoint, refresh phase, last refresh wall-clock time.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let phase = match state.phase {
        Phase::Idle => "idle",
        Phase::Fetching => "fetching...",
        Phase::Rendered => "live",
    };
    let updated = state
        .last_refresh
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());
    let auto = if state.auto_refresh { "auto" } else { "manual" };

    let line = Line::from(vec![
        Span::raw(" sarwatch "),
        Span::raw(format!("| {} ", state.endpoint)),
        Span::raw(format!("| {} ", phase)),
        Span::raw(format!("| updated {} ", updated)),
        Span::raw(format!("| {} ", auto)),
        Span::raw("| h help  q quit"),
    ]);
    frame.render_widget(Paragraph::new(line).style(Styles::header()), area);
}

/// Renders one table pane with its scroll offset applied.
fn render_pane(frame: &mut Frame, area: Rect, table: &TableData, focused: bool, scroll: usize) {
    let title = format!(" {} ({}) ", table.title, table.rows.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let header = Row::new(
        table
            .headers
            .iter()
            .map(|h| Span::styled(*h, Styles::table_header())),
    )
    .style(Styles::table_header())
    .height(1);

    let rows: Vec<Row> = table
        .rows
        .iter()
        .skip(scroll)
        .map(|cells| {
            let spans = cells.iter().map(|cell| match cell.kind {
                CellKind::Structured => Span::styled(cell.text.clone(), Styles::structured()),
                CellKind::Plain if cell.text == "6 - not ok" => {
                    Span::styled(cell.text.clone(), Styles::alert())
                }
                CellKind::Plain => Span::raw(cell.text.clone()),
            });
            Row::new(spans).height(1)
        })
        .collect();

    let widget = Table::new(rows, column_widths(table))
        .header(header)
        .block(block)
        .style(Styles::default());
    frame.render_widget(widget, area);
}

/// Column widths from content, capped so one long message cannot starve
/// the rest; the last column takes the remaining space.
fn column_widths(table: &TableData) -> Vec<Constraint> {
    const MAX_WIDTH: usize = 40;

    let columns = table.headers.len();
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.text.chars().count().min(MAX_WIDTH));
        }
    }

    let mut constraints: Vec<Constraint> = widths
        .iter()
        .take(columns.saturating_sub(1))
        .map(|&w| Constraint::Length(w as u16))
        .collect();
    constraints.push(Constraint::Fill(1));
    constraints
}

/// Centered keybinding overlay.
fn render_help(frame: &mut Frame, area: Rect) {
    let bindings = [
        ("r / F5", "refresh now"),
        ("a", "toggle auto-refresh"),
        ("Tab / 1-3", "switch pane"),
        ("Up/Down, j/k", "scroll"),
        ("PgUp / PgDn", "scroll by page"),
        ("Home / End", "jump to top / bottom"),
        ("h / ?", "this help"),
        ("q", "quit"),
    ];
    let lines: Vec<Line> = bindings
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {:<14}", key), Styles::help_key()),
                Span::styled(*desc, Styles::dim()),
            ])
        })
        .collect();

    let height = (bindings.len() + 2) as u16;
    let popup = centered_rect(area, 44, height);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_style(Styles::border(true)),
        ),
        popup,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
