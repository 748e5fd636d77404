//! # InputBox Component
//!
//! Single-line text field used for new item text and new list names.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing and bracketed paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Handle submission (Enter)
//!
//! The buffer and cursor are internal state. `title`, `placeholder` and
//! `focused` are props set by the parent before each render.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// Border width on each side of the text.
const BORDER_OFFSET: u16 = 1;
/// Top + bottom borders plus the single text row.
pub const INPUT_HEIGHT: u16 = 3;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted non-blank text (Enter pressed). The buffer is cleared.
    Submit(String),
    ContentChanged,
}

pub struct InputBox {
    pub buffer: String,
    pub title: String,
    pub placeholder: String,
    pub focused: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl InputBox {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            title: title.into(),
            placeholder: placeholder.into(),
            focused: true,
            cursor: 0,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// The slice of the buffer that fits in `width` columns, plus the cursor
    /// column within it. Long input scrolls so the cursor stays visible.
    fn visible_text(&self, width: u16) -> (String, usize) {
        let width = width as usize;
        let before = &self.buffer[..self.cursor];
        let after = &self.buffer[self.cursor..];

        // Walk back from the cursor until the line is full
        let mut start = before.len();
        let mut used = 0;
        for (i, c) in before.char_indices().rev() {
            let w = c.width().unwrap_or(0);
            if used + w >= width.max(1) {
                break;
            }
            used += w;
            start = i;
        }

        let mut visible = before[start..].to_string();
        let mut total = used;
        for c in after.chars() {
            let w = c.width().unwrap_or(0);
            if total + w > width {
                break;
            }
            total += w;
            visible.push(c);
        }
        (visible, used)
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(theme::ACCENT)
        } else {
            theme::border()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());

        let inner_width = area.width.saturating_sub(2 * BORDER_OFFSET);

        if self.buffer.is_empty() {
            let placeholder = Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(theme::MUTED).add_modifier(Modifier::ITALIC))
                .block(block);
            frame.render_widget(placeholder, area);
            if self.focused {
                frame.set_cursor_position((area.x + BORDER_OFFSET, area.y + BORDER_OFFSET));
            }
            return;
        }

        let (visible, cursor_col) = self.visible_text(inner_width);
        let input = Paragraph::new(visible).style(theme::text()).block(block);
        frame.render_widget(input, area);

        if self.focused {
            let col = (cursor_col as u16).min(inner_width);
            frame.set_cursor_position((area.x + BORDER_OFFSET + col, area.y + BORDER_OFFSET));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: fold newlines into spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    return None;
                }
                let text = self.buffer.clone();
                self.clear();
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> InputBox {
        let mut input = InputBox::new("Add", "New item...");
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    fn screen(input: &mut InputBox, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, INPUT_HEIGHT)).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_handle_input() {
        let mut input = typed("ab");
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_submit_clears_buffer() {
        let mut input = typed("milk");
        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Submit("milk".to_string())));
        assert!(input.buffer.is_empty());

        // Cursor went back to the start along with the buffer
        input.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(input.handle_event(&TuiEvent::Backspace), Some(InputEvent::ContentChanged));
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut input = typed("   ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "   ");
    }

    #[test]
    fn test_cursor_editing_multibyte() {
        let mut input = typed("héllo");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::CursorRight);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "hllo");

        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(input.buffer, "hllo!");
        assert_eq!(input.handle_event(&TuiEvent::CursorRight), None);
    }

    #[test]
    fn test_paste_folds_newlines() {
        let mut input = typed("");
        input.handle_event(&TuiEvent::Paste("eggs\nbread".into()));
        assert_eq!(input.buffer, "eggs bread");
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let mut input = typed("");
        let text = screen(&mut input, 30);
        assert!(text.contains("New item..."));
        assert!(text.contains("Add"));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let mut input = typed("abcdefghijklmnopqrstuvwxyz");
        let text = screen(&mut input, 12);
        assert!(text.contains("xyz"));
        assert!(!text.contains("abc"));
    }
}
