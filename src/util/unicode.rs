use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let rest = s.get(byte_offset..)?;
    let g = rest.graphemes(true).next()?;
    Some(byte_offset + g.len())
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let head = s.get(..byte_offset)?;
    let g = head.graphemes(true).next_back()?;
    Some(byte_offset - g.len())
}

/// Start of the word left of `byte_offset`, skipping whitespace first.
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let head = &s[..byte_offset.min(s.len())];
    let mut boundary = head.len();
    let mut seen_word = false;
    for (i, g) in head.grapheme_indices(true).rev() {
        let blank = g.chars().all(char::is_whitespace);
        if blank && seen_word {
            break;
        }
        seen_word |= !blank;
        boundary = i;
    }
    boundary
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
