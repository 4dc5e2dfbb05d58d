//! UI rendering for the TUI

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};

use super::app::App;
use super::theme::Theme;
use crate::nav::NavState;
use crate::panels::{CellView, PanelKind, PanelView};

/// Height of one slot row
const CELL_HEIGHT: u16 = 3;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = app.theme();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    // Main layout: header, body, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, &theme, chunks[0]);
    render_body(frame, app, &theme, chunks[1]);
    render_footer(frame, app, &theme, chunks[2]);

    if app.show_help {
        render_help_overlay(frame, &theme, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let titles: Vec<Line> = PanelKind::all()
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let style = if *kind == app.tab {
                Style::default().fg(theme.focus).bold()
            } else {
                Style::default().fg(theme.muted)
            };
            Line::from(Span::styled(format!(" {} {} ", i + 1, kind.title()), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    " slotpager ",
                    Style::default().fg(theme.accent).bold(),
                )),
        )
        .highlight_style(Style::default().fg(theme.focus))
        .select(app.tab.index());

    frame.render_widget(tabs, area);
}

fn render_body(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let view = app.view();
    let border = if view.state == NavState::Animating {
        theme.accent
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", view.title),
            Style::default().fg(theme.text).bold(),
        ))
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", view.position),
            Style::default().fg(theme.muted),
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !app.panel().is_open() {
        let closed = Paragraph::new(Line::from(vec![
            Span::styled("Panel closed. Press ", Style::default().fg(theme.muted)),
            Span::styled("Enter", Style::default().fg(theme.focus)),
            Span::styled(" to reopen.", Style::default().fg(theme.muted)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(closed, inner);
        return;
    }

    render_grid(frame, &view, theme, inner);
}

fn render_grid(frame: &mut Frame, view: &PanelView, theme: &Theme, area: Rect) {
    let columns = view.columns.max(1);
    let row_count = view.cells.len().div_ceil(columns);
    if row_count == 0 {
        return;
    }

    let mut row_constraints = vec![Constraint::Length(CELL_HEIGHT); row_count];
    row_constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];
    for (row, cells) in view.cells.chunks(columns).enumerate() {
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(rows[row]);
        for (column, cell) in cells.iter().enumerate() {
            render_cell(frame, cell.as_ref(), theme, slots[column]);
        }
    }
}

fn render_cell(frame: &mut Frame, cell: Option<&CellView>, theme: &Theme, area: Rect) {
    let Some(cell) = cell else {
        // Inactive slot
        let empty = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.surface));
        frame.render_widget(empty, area);
        return;
    };

    let (border_style, label_style) = if cell.focused {
        (
            Style::default().fg(theme.focus).add_modifier(Modifier::BOLD),
            Style::default().fg(theme.focus).bold(),
        )
    } else {
        (
            Style::default().fg(theme.border),
            Style::default().fg(theme.text),
        )
    };

    let mut spans = vec![Span::styled(cell.label.clone(), label_style)];
    if let Some(detail) = &cell.detail {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(detail.clone(), Style::default().fg(theme.muted)));
    }
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    // Status message takes priority
    if let Some(status) = &app.status_message {
        let color = if status.is_error { theme.bad } else { theme.good };
        let footer = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(status.text.as_str(), Style::default().fg(color)),
        ]))
        .style(Style::default().bg(theme.surface));
        frame.render_widget(footer, area);
        return;
    }

    let mut spans = Vec::new();
    for (key, action) in [
        ("←↓↑→", "move"),
        ("Enter", "select"),
        ("Esc", "close"),
        ("x", "use"),
        ("Tab", "panel"),
        ("t", "theme"),
        ("?", "help"),
        ("q", "quit"),
    ] {
        spans.push(Span::styled(format!(" {key}"), Style::default().fg(theme.focus)));
        spans.push(Span::styled(format!(" {action} "), Style::default().fg(theme.muted)));
    }
    if app.is_animating() {
        spans.push(Span::styled(" ● ", Style::default().fg(theme.warn)));
    }
    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup = centered_rect(50, 60, area);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = [
        ("←/h →/l", "Move focus or turn the page; sell list tabs"),
        ("↑/k ↓/j", "Move focus; save files scroll one line"),
        ("Enter", "Select the focused entry, reopen a closed panel"),
        ("Esc", "Close the panel"),
        ("x", "Use one of the focused item"),
        ("Tab / 1-8", "Switch panel"),
        ("t", "Cycle theme"),
        ("q", "Quit"),
    ]
    .iter()
    .map(|(key, text)| {
        Line::from(vec![
            Span::styled(format!(" {key:<10}"), Style::default().fg(theme.focus)),
            Span::styled(*text, Style::default().fg(theme.text)),
        ])
    })
    .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(Span::styled(" Keys ", Style::default().fg(theme.accent).bold()))
            .style(Style::default().bg(theme.surface)),
    );
    frame.render_widget(help, popup);
}

/// Rect of `percent_x` by `percent_y` centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
