//! # SearchBox Component
//!
//! Single-line text input for the search term.
//!
//! The buffer and cursor are internal state; `focused` is a prop from the
//! parent. Submitting does not clear the buffer, so the term stays visible
//! alongside its results.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// User submitted the term (Enter pressed)
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

pub struct SearchBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// Whether this component currently has focus (prop)
    pub focused: bool,
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
            cursor: 0,
            focused: true,
        }
    }

    fn prev_char_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_char_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.cursor)
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Search");

        // Horizontal scroll keeps the cursor visible in a narrow box
        let inner_width = area.width.saturating_sub(2);
        let prefix_width = self.buffer[..self.cursor].width() as u16;
        let scroll_x = if inner_width > 0 && prefix_width >= inner_width {
            prefix_width - inner_width + 1
        } else {
            0
        };

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, scroll_x));
        frame.render_widget(input, area);

        if self.focused {
            let cursor_x = area.x + 1 + prefix_width.saturating_sub(scroll_x);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_char_boundary();
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(SearchEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = self.next_char_boundary();
                    self.buffer.drain(self.cursor..next);
                    Some(SearchEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.prev_char_boundary();
                    Some(SearchEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.next_char_boundary();
                    Some(SearchEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(search_box: &mut SearchBox, text: &str) {
        for c in text.chars() {
            search_box.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_builds_the_buffer() {
        let mut search_box = SearchBox::new();
        type_text(&mut search_box, "batman");
        assert_eq!(search_box.buffer, "batman");
    }

    #[test]
    fn test_submit_returns_buffer_without_clearing() {
        let mut search_box = SearchBox::new();
        type_text(&mut search_box, "batman");

        let event = search_box.handle_event(&TuiEvent::Submit);

        assert_eq!(event, Some(SearchEvent::Submit("batman".to_string())));
        assert_eq!(search_box.buffer, "batman");
    }

    #[test]
    fn test_backspace_respects_utf8_boundaries() {
        let mut search_box = SearchBox::new();
        type_text(&mut search_box, "café");

        search_box.handle_event(&TuiEvent::Backspace);

        assert_eq!(search_box.buffer, "caf");
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_noop() {
        let mut search_box = SearchBox::new();
        assert_eq!(search_box.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_cursor_movement_and_mid_buffer_insert() {
        let mut search_box = SearchBox::new();
        type_text(&mut search_box, "btman");

        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::InputChar('a'));

        assert_eq!(search_box.buffer, "batman");
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut search_box = SearchBox::new();
        type_text(&mut search_box, "baatman");

        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::CursorLeft);
        search_box.handle_event(&TuiEvent::Delete);

        assert_eq!(search_box.buffer, "batman");
    }
}
