//! # Detail Screen
//!
//! One list's items with an add-item input, completion toggles, per-item
//! delete and "Clear Completed".
//!
//! Two input modes, mirroring how the input box and the item list share the
//! keyboard:
//!
//! - **Input**: keys edit the add-item box; Enter adds. Esc / Tab / arrows
//!   move to Cursor mode.
//! - **Cursor**: arrows pick an item; Space toggles, `d` removes, `c` clears
//!   completed, `D` deletes the whole list. Esc goes back to the overview.
//!   Any other printable key switches to Input and is typed.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::store::TodoList;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::input_box::{INPUT_HEIGHT, InputBox, InputEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// Width of the "[x] " checkbox prefix.
const CHECKBOX_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Cursor,
    Input,
}

/// Events emitted by the detail screen. Indices refer to the list as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    Add(String),
    Toggle(usize),
    Remove(usize),
    ClearCompleted,
    /// Ask for confirmation, then delete the open list.
    DeleteList,
    Back,
}

/// Persistent state for the detail screen.
pub struct DetailState {
    pub selected: usize,
    pub list_state: ListState,
    pub input: InputBox,
    pub mode: InputMode,
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
            input: InputBox::new(" Add ", "New item..."),
            mode: InputMode::Input, // User expects to type immediately
        }
    }

    /// Clamp the selection after items were added or removed.
    pub fn sync(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            let shown = (self.mode == InputMode::Cursor).then_some(self.selected);
            self.list_state.select(shown);
        }
    }

    fn enter_cursor_mode(&mut self, len: usize) {
        self.mode = InputMode::Cursor;
        self.sync(len);
    }

    fn enter_input_mode(&mut self) {
        self.mode = InputMode::Input;
        self.list_state.select(None);
    }

    pub fn handle_event(&mut self, event: &TuiEvent, list: &TodoList) -> Option<DetailEvent> {
        let len = list.items.len();
        self.sync(len);

        match self.mode {
            InputMode::Input => match event {
                TuiEvent::Escape | TuiEvent::Tab | TuiEvent::CursorUp | TuiEvent::CursorDown => {
                    self.enter_cursor_mode(len);
                    None
                }
                _ => match self.input.handle_event(event)? {
                    InputEvent::Submit(text) => Some(DetailEvent::Add(text)),
                    InputEvent::ContentChanged => None,
                },
            },
            InputMode::Cursor => match event {
                TuiEvent::Escape | TuiEvent::Backspace => Some(DetailEvent::Back),
                TuiEvent::Tab | TuiEvent::Submit => {
                    self.enter_input_mode();
                    None
                }
                TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                    if len > 0 {
                        self.selected = self.selected.saturating_sub(1);
                        self.list_state.select(Some(self.selected));
                    }
                    None
                }
                TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                    if len > 0 {
                        self.selected = (self.selected + 1).min(len - 1);
                        self.list_state.select(Some(self.selected));
                    }
                    None
                }
                TuiEvent::InputChar(' ') | TuiEvent::InputChar('x') => {
                    (len > 0).then_some(DetailEvent::Toggle(self.selected))
                }
                TuiEvent::InputChar('d') | TuiEvent::Delete => {
                    (len > 0).then_some(DetailEvent::Remove(self.selected))
                }
                TuiEvent::InputChar('c') => Some(DetailEvent::ClearCompleted),
                TuiEvent::InputChar('D') => Some(DetailEvent::DeleteList),
                // Typing auto-switches to Input mode and forwards the event
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                    self.enter_input_mode();
                    self.input.handle_event(event);
                    None
                }
                _ => None,
            },
        }
    }
}

/// Transient render wrapper for the detail screen.
pub struct Detail<'a> {
    state: &'a mut DetailState,
    list: &'a TodoList,
    /// False while a dialog covers the screen; hides the input cursor.
    active: bool,
}

impl<'a> Detail<'a> {
    pub fn new(state: &'a mut DetailState, list: &'a TodoList) -> Self {
        Self {
            state,
            list,
            active: true,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn help_text(&self) -> &'static str {
        match self.state.mode {
            InputMode::Input => " Enter Add  Esc Items ",
            InputMode::Cursor => " Space Toggle  d Delete  c Clear Completed  D Delete List  Esc Back ",
        }
    }

    fn render_items(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title_bottom(Line::from(self.help_text()).centered())
            .padding(Padding::horizontal(1));

        if self.list.items.is_empty() {
            let empty = Paragraph::new("Nothing here yet.")
                .style(Style::default().fg(theme::MUTED))
                .centered()
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let text_width = inner_width.saturating_sub(CHECKBOX_WIDTH).max(1);
        let cursor_mode = self.state.mode == InputMode::Cursor;

        let items: Vec<ListItem> = self
            .list
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let (checkbox, checkbox_style) = if item.completed {
                    ("[x] ", Style::default().fg(theme::SUCCESS))
                } else {
                    ("[ ] ", Style::default().fg(theme::ACCENT))
                };
                let mut text_style = if item.completed {
                    theme::completed()
                } else {
                    theme::text()
                };
                if cursor_mode && i == self.state.selected {
                    text_style = text_style.patch(theme::selected());
                }

                let lines: Vec<Line> = textwrap::wrap(&item.text, text_width)
                    .into_iter()
                    .enumerate()
                    .map(|(n, segment)| {
                        let prefix = if n == 0 {
                            Span::styled(checkbox, checkbox_style)
                        } else {
                            Span::raw(" ".repeat(CHECKBOX_WIDTH))
                        };
                        Line::from(vec![prefix, Span::styled(segment.into_owned(), text_style)])
                    })
                    .collect();
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl Component for Detail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.list.items.len());

        let [header_area, input_area, items_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        let header = Line::from(vec![
            Span::styled("← Esc ", Style::default().fg(theme::ACCENT)),
            Span::styled(self.list.name.as_str(), theme::heading()),
            Span::styled(
                format!("  {}/{} done", self.list.completed_count(), self.list.items.len()),
                Style::default().fg(theme::MUTED),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), header_area);

        self.state.input.focused = self.active && self.state.mode == InputMode::Input;
        self.state.input.render(frame, input_area);

        self.render_items(frame, items_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn work() -> TodoList {
        test_app().store.list("Work").unwrap().clone()
    }

    fn screen(state: &mut DetailState, list: &TodoList) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| Detail::new(state, list).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_enter_adds() {
        let list = work();
        let mut state = DetailState::new();
        for c in "Buy milk".chars() {
            assert_eq!(state.handle_event(&TuiEvent::InputChar(c), &list), None);
        }
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &list),
            Some(DetailEvent::Add("Buy milk".into()))
        );
        assert!(state.input.buffer.is_empty());
    }

    #[test]
    fn test_cursor_mode_actions() {
        let list = work();
        let mut state = DetailState::new();
        state.handle_event(&TuiEvent::Escape, &list);
        assert_eq!(state.mode, InputMode::Cursor);

        state.handle_event(&TuiEvent::CursorDown, &list);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar(' '), &list),
            Some(DetailEvent::Toggle(1))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('d'), &list),
            Some(DetailEvent::Remove(1))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('c'), &list),
            Some(DetailEvent::ClearCompleted)
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('D'), &list),
            Some(DetailEvent::DeleteList)
        );
        assert_eq!(state.handle_event(&TuiEvent::Escape, &list), Some(DetailEvent::Back));
    }

    #[test]
    fn test_typing_in_cursor_mode_switches_to_input() {
        let list = work();
        let mut state = DetailState::new();
        state.handle_event(&TuiEvent::Tab, &list);
        state.handle_event(&TuiEvent::InputChar('B'), &list);
        assert_eq!(state.mode, InputMode::Input);
        assert_eq!(state.input.buffer, "B");
    }

    #[test]
    fn test_empty_list_has_nothing_to_toggle() {
        let list = TodoList::new("Empty");
        let mut state = DetailState::new();
        state.handle_event(&TuiEvent::Escape, &list);
        assert_eq!(state.handle_event(&TuiEvent::InputChar(' '), &list), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('d'), &list), None);
    }

    #[test]
    fn test_render_shows_items_and_checkboxes() {
        let list = work();
        let mut state = DetailState::new();
        let text = screen(&mut state, &list);
        assert!(text.contains("Work"));
        assert!(text.contains("1/3 done"));
        assert!(text.contains("[ ] A"));
        assert!(text.contains("[x] B"));
        assert!(text.contains("New item..."));
    }

    #[test]
    fn test_render_completed_item_is_crossed_out() {
        let list = work();
        let mut state = DetailState::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| Detail::new(&mut state, &list).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let crossed = buffer
            .content()
            .iter()
            .any(|c| c.symbol() == "B" && c.modifier.contains(ratatui::style::Modifier::CROSSED_OUT));
        assert!(crossed);
    }
}
