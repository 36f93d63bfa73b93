//! Cursor position and horizontal scrolling for the single-line search box.
//!
//! `CursorState` owns the cursor byte offset and the first visible column.
//! The text itself is owned by `SearchBox` and passed in explicitly.

use unicode_width::UnicodeWidthStr;

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First display column shown in the viewport
    pub scroll_col: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_col: 0,
        }
    }

    /// Place the cursor after the last character (used when the text is replaced).
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_col = 0;
    }

    /// Display column of the cursor within the whole buffer.
    pub fn column(&self, buffer: &str) -> usize {
        buffer[..self.pos].width()
    }

    /// Scroll horizontally so the cursor stays inside a viewport `width` columns wide.
    pub fn update_scroll(&mut self, buffer: &str, width: u16) {
        if width == 0 {
            self.scroll_col = 0;
            return;
        }
        let width = usize::from(width);
        let col = self.column(buffer);
        if col < self.scroll_col {
            self.scroll_col = col;
        } else if col >= self.scroll_col + width {
            self.scroll_col = col + 1 - width;
        }
        // Don't leave blank space on the left after deletions
        let max_scroll = (buffer.width() + 1).saturating_sub(width);
        self.scroll_col = self.scroll_col.min(max_scroll);
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// The slice of `text` visible from display column `start`, at most `width` columns wide.
pub(super) fn visible_slice(text: &str, start: usize, width: u16) -> String {
    use unicode_width::UnicodeWidthChar;

    let end = start + usize::from(width);
    let mut col = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if col >= start {
            if col + w > end {
                break;
            }
            out.push(c);
        }
        col += w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_cyrillic() {
        let text = "юа";
        assert_eq!(next_char_boundary(text, 0), 2);
        assert_eq!(next_char_boundary(text, 2), 4);
        assert_eq!(prev_char_boundary(text, 4), 2);
        assert_eq!(prev_char_boundary(text, 2), 0);
    }

    #[test]
    fn test_column_counts_display_width() {
        let mut cursor = CursorState::new();
        let text = "космос";
        cursor.move_to_end(text);
        assert_eq!(cursor.pos, 12);
        assert_eq!(cursor.column(text), 6);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut cursor = CursorState::new();
        let text = "0123456789abcdef";
        cursor.move_to_end(text);
        cursor.update_scroll(text, 10);
        // Cursor at column 16 must be the last visible cell
        assert_eq!(cursor.scroll_col, 7);

        cursor.reset();
        cursor.update_scroll(text, 10);
        assert_eq!(cursor.scroll_col, 0);
    }

    #[test]
    fn test_scroll_past_u16_columns() {
        let mut cursor = CursorState::new();
        let text = "a".repeat(70_000);
        cursor.move_to_end(&text);
        cursor.update_scroll(&text, 36);
        assert_eq!(cursor.column(&text), 70_000);
        assert_eq!(cursor.scroll_col, 69_965);
        assert_eq!(visible_slice(&text, cursor.scroll_col, 36).len(), 35);
    }

    #[test]
    fn test_visible_slice() {
        assert_eq!(visible_slice("0123456789", 3, 4), "3456");
        assert_eq!(visible_slice("природа", 0, 3), "при");
    }
}
