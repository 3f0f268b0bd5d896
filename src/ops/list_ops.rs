use crate::model::todo::Todo;

/// Error type for list operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("todo index out of range: {0}")]
    IndexOutOfRange(usize),
}

/// Where a new or transferred todo lands in its destination list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Top,
    Bottom,
}

/// Insert a todo at the top or bottom of a list
pub fn insert(list: &mut Vec<Todo>, todo: Todo, position: InsertPosition) {
    match position {
        InsertPosition::Top => list.insert(0, todo),
        InsertPosition::Bottom => list.push(todo),
    }
}

/// Swap the todo at `index` with its neighbor `index + 1` (down) or `index - 1`
/// (up). Returns the new index of the moved todo.
pub fn swap_adjacent(list: &mut [Todo], index: usize, down: bool) -> Result<usize, ListError> {
    if index >= list.len() {
        return Err(ListError::IndexOutOfRange(index));
    }
    let target = if down {
        index + 1
    } else {
        index
            .checked_sub(1)
            .ok_or(ListError::IndexOutOfRange(index))?
    };
    if target >= list.len() {
        return Err(ListError::IndexOutOfRange(target));
    }
    list.swap(index, target);
    Ok(target)
}

/// Move the todo at `index` to the head of the list, shifting the ones above it down.
pub fn move_to_top(list: &mut [Todo], index: usize) -> Result<(), ListError> {
    if index >= list.len() {
        return Err(ListError::IndexOutOfRange(index));
    }
    list[..=index].rotate_right(1);
    Ok(())
}

/// Remove and return the todo at `index`
pub fn remove_at(list: &mut Vec<Todo>, index: usize) -> Result<Todo, ListError> {
    if index >= list.len() {
        return Err(ListError::IndexOutOfRange(index));
    }
    Ok(list.remove(index))
}

/// Move the todo at `index` of `from` into `to`.
pub fn transfer(
    from: &mut Vec<Todo>,
    index: usize,
    to: &mut Vec<Todo>,
    position: InsertPosition,
) -> Result<(), ListError> {
    let todo = remove_at(from, index)?;
    insert(to, todo, position);
    Ok(())
}

/// Clamp a cursor into `[0, len - 1]`, or 0 for an empty list
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn list(texts: &[&str]) -> Vec<Todo> {
        let created = Local.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap();
        texts
            .iter()
            .map(|t| Todo::new((*t).to_string(), created))
            .collect()
    }

    fn texts(list: &[Todo]) -> Vec<&str> {
        list.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_insert_top_and_bottom() {
        let mut todos = list(&["B"]);
        insert(&mut todos, list(&["A"]).remove(0), InsertPosition::Top);
        insert(&mut todos, list(&["C"]).remove(0), InsertPosition::Bottom);
        assert_eq!(texts(&todos), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_swap_down_and_up() {
        let mut todos = list(&["A", "B", "C"]);
        assert_eq!(swap_adjacent(&mut todos, 0, true), Ok(1));
        assert_eq!(texts(&todos), vec!["B", "A", "C"]);
        assert_eq!(swap_adjacent(&mut todos, 2, false), Ok(1));
        assert_eq!(texts(&todos), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_swap_at_edges_is_an_error() {
        let mut todos = list(&["A", "B"]);
        assert!(swap_adjacent(&mut todos, 1, true).is_err());
        assert!(swap_adjacent(&mut todos, 0, false).is_err());
        assert!(swap_adjacent(&mut todos, 5, true).is_err());
        assert_eq!(texts(&todos), vec!["A", "B"]);
    }

    #[test]
    fn test_move_to_top_keeps_relative_order() {
        let mut todos = list(&["A", "B", "C"]);
        move_to_top(&mut todos, 2).unwrap();
        assert_eq!(texts(&todos), vec!["C", "A", "B"]);

        move_to_top(&mut todos, 0).unwrap();
        assert_eq!(texts(&todos), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_transfer_prepends_or_appends() {
        let mut ready = list(&["A", "B"]);
        let mut backlog = list(&["X"]);
        transfer(&mut ready, 1, &mut backlog, InsertPosition::Top).unwrap();
        assert_eq!(texts(&ready), vec!["A"]);
        assert_eq!(texts(&backlog), vec!["B", "X"]);

        transfer(&mut backlog, 0, &mut ready, InsertPosition::Bottom).unwrap();
        assert_eq!(texts(&ready), vec!["A", "B"]);
    }

    #[test]
    fn test_transfer_out_of_range_leaves_lists_alone() {
        let mut from = list(&["A"]);
        let mut to = Vec::new();
        assert_eq!(
            transfer(&mut from, 3, &mut to, InsertPosition::Bottom),
            Err(ListError::IndexOutOfRange(3))
        );
        assert_eq!(from.len(), 1);
        assert!(to.is_empty());
    }

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor(0, 0), 0);
        assert_eq!(clamp_cursor(4, 0), 0);
        assert_eq!(clamp_cursor(4, 3), 2);
        assert_eq!(clamp_cursor(1, 3), 1);
    }
}
