use chrono::{Datelike, Duration, NaiveDate};
use indexmap::IndexMap;

use crate::model::todo::Todo;

/// Number of completed todos shown when no limit is configured
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Derive the displayed projection of the completed list: most recently
/// completed first, undated records after all dated ones, at most `limit` items.
///
/// The sort is stable, so undated records keep their list order.
pub fn recompute_displayed(completed: &[Todo], limit: usize) -> Vec<Todo> {
    let mut sorted: Vec<Todo> = completed.to_vec();
    sorted.sort_by(|a, b| match (a.completed_at, b.completed_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    sorted.truncate(limit);
    sorted
}

/// Locate the authoritative record for a projected item.
///
/// Matches by id; records that only agree on text and creation time are the
/// fallback for stores written before ids existed.
pub fn find_authoritative(item: &Todo, list: &[Todo]) -> Option<usize> {
    list.iter()
        .position(|t| t.id == item.id)
        .or_else(|| list.iter().position(|t| t.same_record(item)))
}

/// How many todos were completed on the given local calendar day
pub fn count_completed_on(list: &[Todo], day: NaiveDate) -> usize {
    list.iter()
        .filter_map(|t| t.completed_at)
        .filter(|at| at.date_naive() == day)
        .count()
}

/// Records completed on one calendar day, oldest first
#[derive(Debug, Clone)]
pub struct DayGroup<'a> {
    pub day: NaiveDate,
    pub todos: Vec<&'a Todo>,
}

/// Days of one Sunday-to-Saturday week, most recent day first
#[derive(Debug, Clone)]
pub struct WeekGroup<'a> {
    pub start: NaiveDate,
    pub days: Vec<DayGroup<'a>>,
}

impl WeekGroup<'_> {
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }
}

/// The Sunday starting the week that contains `day`
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_sunday() as i64)
}

/// Group completed records by week, then by day. Weeks and days come most
/// recent first; records without a completion time are left out.
pub fn group_by_week(list: &[Todo]) -> Vec<WeekGroup<'_>> {
    let mut dated: Vec<&Todo> = list.iter().filter(|t| t.completed_at.is_some()).collect();
    dated.sort_by_key(|t| t.completed_at);

    let mut weeks: IndexMap<NaiveDate, IndexMap<NaiveDate, Vec<&Todo>>> = IndexMap::new();
    for todo in dated.into_iter().rev() {
        let Some(at) = todo.completed_at else { continue };
        let day = at.date_naive();
        weeks
            .entry(week_start(day))
            .or_default()
            .entry(day)
            .or_default()
            .push(todo);
    }

    weeks
        .into_iter()
        .map(|(start, days)| WeekGroup {
            start,
            days: days
                .into_iter()
                .map(|(day, mut todos)| {
                    todos.reverse();
                    DayGroup { day, todos }
                })
                .collect(),
        })
        .collect()
}

/// "Jan 15 - 21" within one month, "Jan 29 - Feb 4" across two
pub fn format_week_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.month() == end.month() {
        format!("{} - {}", start.format("%b %-d"), end.day())
    } else {
        format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
    }
}

/// "Today (Monday, Jan 15)", "Yesterday (Sunday, Jan 14)" or "Friday, Jan 12"
pub fn format_day_header(day: NaiveDate, today: NaiveDate) -> String {
    let label = day.format("%A, %b %-d").to_string();
    if day == today {
        format!("Today ({label})")
    } else if Some(day) == today.pred_opt() {
        format!("Yesterday ({label})")
    } else {
        label
    }
}

/// Merge record sets, keeping the first occurrence of each todo (by id, or by
/// text and creation time for records that predate ids).
pub fn merge_unique(sources: impl IntoIterator<Item = Todo>) -> Vec<Todo> {
    let mut merged: Vec<Todo> = Vec::new();
    for todo in sources {
        if find_authoritative(&todo, &merged).is_none() {
            merged.push(todo);
        }
    }
    merged
}
