use chrono::{DateTime, Local};
use ratatui::text::Span;

use crate::model::{ListKind, Todo};
use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// "Jan 2, 15:04"
fn short_timestamp(at: DateTime<Local>) -> String {
    at.format("%b %-d, %H:%M").to_string()
}

/// The timestamp a row shows: completion time in the Completed tab, creation
/// time elsewhere.
pub(super) fn row_timestamp(todo: &Todo, view: ListKind) -> String {
    let at = match (view, todo.completed_at) {
        (ListKind::Completed, Some(done)) => done,
        _ => todo.created_at,
    };
    format!("[{}]", short_timestamp(at))
}

/// Scroll offset that keeps rows `[first, last]` inside a window of `height`
/// rows, moving as little as possible from `scroll`.
pub(super) fn scroll_to_show(scroll: usize, first: usize, last: usize, height: usize) -> usize {
    if height == 0 {
        return first;
    }
    if first < scroll {
        first
    } else if last >= scroll + height {
        (last + 1).saturating_sub(height).min(first)
    } else {
        scroll
    }
}
