//! # SearchBox Component
//!
//! Single-line search field above the card grid.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace/delete)
//! - Cursor movement (left/right, home/end) with horizontal scrolling
//! - Emit the full buffer on every edit so the parent can re-filter
//! - Show a placeholder when empty
//!
//! ## State Management
//!
//! The buffer is internal state, kept in sync with `App::query()` by the
//! parent: edits flow out as `SearchEvent::Changed`, and tag clicks or
//! resets flow back in through `set_text`. `focused` is a prop.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary, visible_slice};

pub const PLACEHOLDER: &str = "Поиск по названию, тегам, описанию...";

/// Search glyph plus a space, drawn before the text.
const PREFIX: &str = "⌕ ";
const PREFIX_WIDTH: u16 = 2;
/// Left/right borders.
const BORDER_OVERHEAD: u16 = 2;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Buffer changed; carries the full new text
    Changed(String),
    /// Enter pressed
    Submit,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the box has keyboard focus (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Replace the text wholesale (tag click, reset) and put the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_string();
            self.cursor.reset();
            self.cursor.move_to_end(&self.buffer);
        }
    }

    /// Columns available for text inside the box.
    fn text_width(area_width: u16) -> u16 {
        area_width.saturating_sub(BORDER_OVERHEAD + PREFIX_WIDTH)
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = Self::text_width(area.width);
        self.cursor.update_scroll(&self.buffer, width);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let prefix = Span::styled(PREFIX, Style::default().fg(Color::DarkGray));
        let line = if self.buffer.is_empty() {
            Line::from(vec![
                prefix,
                Span::styled(
                    PLACEHOLDER,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ])
        } else {
            Line::from(vec![
                prefix,
                Span::raw(visible_slice(&self.buffer, self.cursor.scroll_col, width)),
            ])
        };

        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused && width > 0 {
            let offset = self
                .cursor
                .column(&self.buffer)
                .saturating_sub(self.cursor.scroll_col);
            let col = u16::try_from(offset).unwrap_or(width).min(width);
            frame.set_cursor_position((area.x + 1 + PREFIX_WIDTH + col, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines become spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                if flat.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor.pos, &flat);
                self.cursor.pos += flat.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor.pos < self.buffer.len() {
                    self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.move_to_end(&self.buffer);
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(search: &mut SearchBox, text: &str) -> Option<SearchEvent> {
        text.chars()
            .map(|c| search.handle_event(&TuiEvent::InputChar(c)))
            .last()
            .flatten()
    }

    #[test]
    fn test_typing_emits_full_buffer() {
        let mut search = SearchBox::new();
        assert_eq!(
            type_str(&mut search, "кос"),
            Some(SearchEvent::Changed("кос".to_string()))
        );
        assert_eq!(search.buffer, "кос");
    }

    #[test]
    fn test_backspace_removes_whole_char() {
        let mut search = SearchBox::new();
        type_str(&mut search, "ночь");
        let res = search.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(SearchEvent::Changed("ноч".to_string())));
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut search = SearchBox::new();
        type_str(&mut search, "wb");
        search.handle_event(&TuiEvent::CursorLeft);
        let res = search.handle_event(&TuiEvent::InputChar('e'));
        assert_eq!(res, Some(SearchEvent::Changed("web".to_string())));
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut search = SearchBox::new();
        type_str(&mut search, "4kk");
        search.handle_event(&TuiEvent::CursorHome);
        search.handle_event(&TuiEvent::CursorRight);
        let res = search.handle_event(&TuiEvent::Delete);
        assert_eq!(res, Some(SearchEvent::Changed("4k".to_string())));
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut search = SearchBox::new();
        let res = search.handle_event(&TuiEvent::Paste("звуки\nлеса".to_string()));
        assert_eq!(res, Some(SearchEvent::Changed("звуки леса".to_string())));
    }

    #[test]
    fn test_set_text_keeps_verbatim_and_moves_cursor() {
        let mut search = SearchBox::new();
        search.set_text("природа");
        assert_eq!(search.buffer, "природа");
        // Typing continues at the end
        let res = search.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(res, Some(SearchEvent::Changed("природа!".to_string())));
    }

    #[test]
    fn test_render_after_very_long_paste() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new();
        search.handle_event(&TuiEvent::Paste("a".repeat(70_000)));

        terminal
            .draw(|f| {
                let area = f.area();
                search.render(f, area);
            })
            .unwrap();

        // Scrolled to the tail, cursor inside the box
        assert!(buffer_text(&terminal).contains(&"a".repeat(35)));
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.y, 1);
        assert!(cursor.x < 39);
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new();

        terminal
            .draw(|f| {
                let area = f.area();
                search.render(f, area);
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains(PLACEHOLDER));
    }

    #[test]
    fn test_render_shows_buffer() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new();
        search.set_text("таймлапс");

        terminal
            .draw(|f| {
                let area = f.area();
                search.render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("таймлапс"));
        assert!(!text.contains(PLACEHOLDER));
    }
}
