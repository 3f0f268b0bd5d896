use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ListKind;
use crate::ops::completed::count_completed_on;
use crate::tui::app::App;

/// Render the tab bar: one tab per list, with a separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();
    for kind in ListKind::ALL {
        spans.push(Span::styled("  ", Style::default().bg(bg)));
        spans.push(Span::styled(
            format!(" {} ", kind.label()),
            tab_style(app, kind == app.view),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let separator = Span::styled(
        "\u{2500}".repeat(chunks[1].width as usize),
        Style::default().fg(app.theme.tab_bg).bg(bg),
    );
    frame.render_widget(Paragraph::new(Line::from(separator)), chunks[1]);
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.highlight)
            .bg(app.theme.tab_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}

/// "Completed today: N" above the list
pub fn render_header(frame: &mut Frame, app: &App, area: Rect, today: NaiveDate) {
    let bg = app.theme.background;
    let count = count_completed_on(&app.lists.completed, today);
    let line = Line::from(vec![
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            "Completed today:",
            Style::default()
                .fg(app.theme.blue)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            count.to_string(),
            Style::default()
                .fg(app.theme.green)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
