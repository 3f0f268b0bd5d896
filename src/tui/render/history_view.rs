use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::completed::{format_day_header, format_week_range, group_by_week};
use crate::tui::app::App;
use crate::tui::wrap::wrap_text;

use super::helpers::scroll_to_show;

/// Completed tab grouped by week and day. The todo under the cursor is
/// highlighted and kept in view.
pub fn render_history_view(frame: &mut Frame, app: &mut App, area: Rect, today: NaiveDate) {
    let bg = app.theme.background;
    let weeks = group_by_week(&app.lists.completed);
    if weeks.is_empty() {
        app.scroll = 0;
        let line = Line::from(Span::styled(
            "  Nothing completed yet",
            Style::default().fg(app.theme.cyan).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let text_width = (area.width as usize).saturating_sub(16).max(10);
    let selected = app.current_todo().map(|t| t.id);
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_row = None;

    for week in &weeks {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                format!("Week of {}", format_week_range(week.start, week.end())),
                Style::default()
                    .fg(app.theme.blue)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        for day in &week.days {
            lines.push(Line::from(vec![
                Span::styled("    ", Style::default().bg(bg)),
                Span::styled(
                    format_day_header(day.day, today),
                    Style::default().fg(app.theme.cyan).bg(bg),
                ),
            ]));

            for todo in &day.todos {
                let is_cursor = Some(todo.id) == selected;
                if is_cursor {
                    cursor_row = Some(lines.len());
                }
                let time = todo
                    .completed_at
                    .map(|at| at.format("%H:%M").to_string())
                    .unwrap_or_default();
                let text_style = if is_cursor {
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.text).bg(bg)
                };

                for (row, segment) in wrap_text(&todo.text, text_width).into_iter().enumerate() {
                    let lead = if row > 0 {
                        "              ".to_string()
                    } else if is_cursor {
                        "    > ".to_string()
                    } else {
                        "      ".to_string()
                    };
                    let mut spans = vec![Span::styled(
                        lead,
                        Style::default().fg(app.theme.highlight).bg(bg),
                    )];
                    if row == 0 {
                        spans.push(Span::styled(
                            format!("{time}  "),
                            Style::default().fg(app.theme.dim).bg(bg),
                        ));
                    }
                    spans.push(Span::styled(segment, text_style));
                    lines.push(Line::from(spans));
                }
            }
        }
    }

    let height = area.height as usize;
    let scroll = match cursor_row {
        Some(row) => scroll_to_show(app.scroll, row, row, height),
        None => 0,
    };
    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    app.scroll = scroll;

    frame.render_widget(
        Paragraph::new(visible).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListKind, Lists};
    use crate::tui::render::test_helpers::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn groups_by_week_then_day() {
        let fixture = AppFixture::new();
        let mut lists = Lists::default();
        lists.completed = vec![
            completed_todo("Last week", Local.with_ymd_and_hms(2025, 1, 8, 12, 0, 0).unwrap()),
            completed_todo("Monday", Local.with_ymd_and_hms(2025, 1, 13, 9, 15, 0).unwrap()),
            completed_todo("Wednesday", Local.with_ymd_and_hms(2025, 1, 15, 17, 45, 0).unwrap()),
        ];
        let mut app = fixture.app_with(lists);
        app.switch_view(ListKind::Completed);
        app.prettify = true;
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_history_view(frame, &mut app, area, today);
        });
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows[0], "  Week of Jan 12 - 18");
        assert_eq!(rows[1], "    Today (Wednesday, Jan 15)");
        assert_eq!(rows[2], "    > 17:45  Wednesday");
        assert_eq!(rows[3], "    Monday, Jan 13");
        assert_eq!(rows[4], "      09:15  Monday");
        assert_eq!(rows[5], "");
        assert_eq!(rows[6], "  Week of Jan 5 - 11");
        assert!(rows[7].contains("Wednesday, Jan 8"));
    }

    #[test]
    fn nothing_completed() {
        let fixture = AppFixture::new();
        let mut app = fixture.app();
        app.switch_view(ListKind::Completed);
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let output = render_to_string(TERM_W, 4, |frame, area| {
            render_history_view(frame, &mut app, area, today);
        });
        assert_eq!(output, "  Nothing completed yet");
    }
}
