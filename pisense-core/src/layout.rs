//! Text layout for character displays
//!
//! Splits text into display rows and pads each row to the display width.
//! Rows are 1-based, as printed on most LCD modules.

use heapless::String;

/// Widest row an HD44780 controller can address
pub const MAX_COLUMNS: usize = 40;

/// Bytes needed for a full row of the widest UTF-8 characters
const MAX_LINE_BYTES: usize = MAX_COLUMNS * 4;

/// One laid out display row
pub type Line = String<MAX_LINE_BYTES>;

/// Horizontal alignment of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// Split `text` into the part that fits on one row and the remainder
///
/// Text longer than `width` breaks at the last space within the first
/// `width + 1` characters, or hard at `width` if there is none. The
/// remainder has surrounding whitespace trimmed.
pub fn split_line(text: &str, width: usize) -> (&str, &str) {
    let len = text.chars().count();
    if len <= width {
        return (text, "");
    }

    let head_end = byte_offset(text, width + 1);
    let cut = match text[..head_end].rfind(' ') {
        Some(space) => space,
        None => byte_offset(text, width),
    };

    (&text[..cut], text[cut..].trim())
}

/// Pad `text` to `width` characters with spaces
///
/// Text wider than the row is truncated. Centering puts the odd space on
/// the left when both the margin and the width are odd.
pub fn pad_line(text: &str, width: usize, align: Align) -> Line {
    let width = width.min(MAX_COLUMNS);
    let len = text.chars().count().min(width);
    let margin = width - len;

    let left = match align {
        Align::Left => 0,
        Align::Right => margin,
        Align::Center => margin / 2 + (margin & width & 1),
    };

    let mut line = Line::new();
    push_spaces(&mut line, left);
    for c in text.chars().take(len) {
        // At most MAX_COLUMNS chars of at most 4 bytes each
        let _ = line.push(c);
    }
    push_spaces(&mut line, margin - left);
    line
}

/// Lay out `text` starting at `row`
///
/// Returns the rows to write, in order, as `(row, padded text)`. Wrapped
/// text continues on the next row while `row < rows`.
pub fn layout(text: &str, row: u8, columns: u8, rows: u8, align: Align) -> Vec<(u8, Line)> {
    let width = usize::from(columns);
    let mut lines = Vec::new();
    let mut row = row;
    let mut rest = text;

    loop {
        let (head, tail) = split_line(rest, width);
        lines.push((row, pad_line(head, width, align)));

        if tail.is_empty() || row >= rows {
            break;
        }
        row += 1;
        rest = tail;
    }

    lines
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn push_spaces(line: &mut Line, count: usize) {
    for _ in 0..count {
        let _ = line.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_not_split() {
        assert_eq!(split_line("Hello", 20), ("Hello", ""));
        assert_eq!(
            split_line("Hello Raspberry Pi 3", 20),
            ("Hello Raspberry Pi 3", "")
        );
    }

    #[test]
    fn test_split_at_last_space() {
        assert_eq!(split_line("hello big world", 10), ("hello big", "world"));
        // A space right after the last column still counts
        assert_eq!(split_line("0123456789 tail", 10), ("0123456789", "tail"));
    }

    #[test]
    fn test_split_hard_without_space() {
        assert_eq!(split_line("abcdefghijkl", 10), ("abcdefghij", "kl"));
    }

    #[test]
    fn test_pad_left_right() {
        assert_eq!(pad_line("ab", 5, Align::Left).as_str(), "ab   ");
        assert_eq!(pad_line("ab", 5, Align::Right).as_str(), "   ab");
    }

    #[test]
    fn test_pad_center() {
        // margin 3, width 5: the odd space goes left
        assert_eq!(pad_line("ab", 5, Align::Center).as_str(), "  ab ");
        // margin 2
        assert_eq!(pad_line("abc", 5, Align::Center).as_str(), " abc ");
        // margin 3, width 4 (even): the odd space goes right
        assert_eq!(pad_line("a", 4, Align::Center).as_str(), " a  ");
    }

    #[test]
    fn test_pad_truncates() {
        assert_eq!(pad_line("abcdef", 4, Align::Left).as_str(), "abcd");
    }

    #[test]
    fn test_pad_keeps_full_row_of_multibyte_chars() {
        let text = "°".repeat(MAX_COLUMNS);
        let line = pad_line(&text, MAX_COLUMNS, Align::Left);
        assert_eq!(line.as_str(), text);

        let wide = "😀".repeat(MAX_COLUMNS + 2);
        let line = pad_line(&wide, MAX_COLUMNS, Align::Center);
        assert_eq!(line.chars().count(), MAX_COLUMNS);
        assert!(line.chars().all(|c| c == '😀'));
    }

    #[test]
    fn test_layout_wraps_onto_following_rows() {
        let lines = layout("one two three four", 1, 8, 4, Align::Left);
        let rendered: Vec<(u8, &str)> = lines.iter().map(|(r, l)| (*r, l.as_str())).collect();
        assert_eq!(
            rendered,
            vec![(1, "one two "), (2, "three   "), (3, "four    ")]
        );
    }

    #[test]
    fn test_layout_drops_overflow_past_last_row() {
        let lines = layout("aaaa bbbb cccc", 2, 4, 2, Align::Left);
        let rows: Vec<u8> = lines.iter().map(|(r, _)| *r).collect();
        assert_eq!(rows, vec![2]);
    }
}
