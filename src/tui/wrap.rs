use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode::display_width;

/// Wrap text into rows of at most `width` cells, breaking after whitespace.
///
/// A single word wider than `width` is split between graphemes. Width 0
/// disables wrapping.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || display_width(text) <= width {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_word_bounds() {
        let w = display_width(word);
        if row_width + w <= width {
            row.push_str(word);
            row_width += w;
            continue;
        }
        if word.chars().all(char::is_whitespace) {
            // Trailing space at a break point is dropped
            rows.push(std::mem::take(&mut row));
            row_width = 0;
            continue;
        }
        if !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        for g in word.graphemes(true) {
            let gw = display_width(g);
            if row_width + gw > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push_str(g);
            row_width += gw;
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
