pub mod helpers;
pub mod history_view;
pub mod list_view;
pub mod prompt;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use chrono::{Local, NaiveDate};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::model::ListKind;

use super::app::App;

/// Draw one frame
pub fn render(frame: &mut Frame, app: &mut App) {
    render_at(frame, app, Local::now().date_naive());
}

/// Render with an explicit "today" for the completed-today count and day headers
pub fn render_at(frame: &mut Frame, app: &mut App, today: NaiveDate) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let prompt_lines = prompt::prompt_lines(app, area.width);

    // Layout: tab bar (2 rows) | header (2 rows) | content | prompt | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(prompt_lines.len() as u16),
            Constraint::Length(1),
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);
    tab_bar::render_header(frame, app, chunks[1], today);

    if app.view == ListKind::Completed && app.prettify {
        history_view::render_history_view(frame, app, chunks[2], today);
    } else {
        list_view::render_list_view(frame, app, chunks[2]);
    }

    prompt::render_prompt(frame, app, chunks[3], prompt_lines);
    status_row::render_status_row(frame, app, chunks[4]);
}
