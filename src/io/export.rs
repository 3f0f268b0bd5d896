use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate};

use crate::io::store::{Store, StoreError, atomic_write};
use crate::model::todo::Todo;
use crate::ops::completed::{
    WeekGroup, format_day_header, format_week_range, group_by_week, merge_unique,
};

/// Render grouped completions as markdown: weeks, then days, then todos with
/// their notes as nested bullets.
pub fn render_markdown(weeks: &[WeekGroup<'_>], today: NaiveDate) -> String {
    let mut out = String::from("# Completed\n");
    if weeks.is_empty() {
        out.push_str("\nNothing completed yet.\n");
        return out;
    }
    for week in weeks {
        let _ = write!(out, "\n## {}\n", format_week_range(week.start, week.end()));
        for day in &week.days {
            let _ = write!(out, "\n### {}\n\n", format_day_header(day.day, today));
            for todo in &day.todos {
                let _ = writeln!(out, "- {}", todo.text);
                for note in &todo.notes {
                    let _ = writeln!(out, "  - {note}");
                }
            }
        }
    }
    out
}

/// Write every completed record (the live list plus all backups) to a dated
/// markdown file in the data directory. Returns the file's path.
pub fn export_markdown(
    store: &Store,
    completed: &[Todo],
    now: DateTime<Local>,
) -> Result<PathBuf, StoreError> {
    let backups = store.load_backups(now)?;
    let records = merge_unique(completed.iter().cloned().chain(backups));
    let today = now.date_naive();
    let markdown = render_markdown(&group_by_week(&records), today);

    let path = store.export_path(today);
    atomic_write(&path, markdown.as_bytes()).map_err(|e| StoreError::Write {
        path: path.clone(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), count = records.len(), "exported completed todos");
    Ok(path)
}
