//! # Dialogs
//!
//! Modal overlays drawn on top of the current screen. While one is open it
//! receives every key.
//!
//! - `Dialog::NewList`: name prompt (Enter creates, Esc cancels)
//! - `Dialog::ConfirmDelete`: Yes/No before a list is deleted
//! - `NoticeBox`: error message from `App::notice`, dismissed with Enter/Esc

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::core::state::Notice;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::input_box::{INPUT_HEIGHT, InputBox, InputEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub enum Dialog {
    NewList(InputBox),
    ConfirmDelete { list: String, yes: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    CreateList(String),
    DeleteList(String),
    Cancel,
}

impl Dialog {
    pub fn new_list() -> Self {
        // The surrounding box carries the title
        Dialog::NewList(InputBox::new("", "Enter new list name:"))
    }

    pub fn confirm_delete(list: impl Into<String>) -> Self {
        // Default to "No" so a stray Enter never deletes
        Dialog::ConfirmDelete {
            list: list.into(),
            yes: false,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DialogEvent> {
        match self {
            Dialog::NewList(input) => match event {
                TuiEvent::Escape => Some(DialogEvent::Cancel),
                _ => match input.handle_event(event)? {
                    InputEvent::Submit(name) => Some(DialogEvent::CreateList(name)),
                    InputEvent::ContentChanged => None,
                },
            },
            Dialog::ConfirmDelete { list, yes } => match event {
                TuiEvent::Escape | TuiEvent::InputChar('n') | TuiEvent::InputChar('N') => {
                    Some(DialogEvent::Cancel)
                }
                TuiEvent::InputChar('y') | TuiEvent::InputChar('Y') => {
                    Some(DialogEvent::DeleteList(list.clone()))
                }
                TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::Tab => {
                    *yes = !*yes;
                    None
                }
                TuiEvent::Submit => Some(if *yes {
                    DialogEvent::DeleteList(list.clone())
                } else {
                    DialogEvent::Cancel
                }),
                _ => None,
            },
        }
    }
}

impl Component for Dialog {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            Dialog::NewList(input) => {
                let overlay = centered_box(50, INPUT_HEIGHT + 2, area);
                frame.render_widget(Clear, overlay);

                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme::ACCENT))
                    .title(" New List ")
                    .title_bottom(Line::from(" Enter Create  Esc Cancel ").centered());
                let inner = block.inner(overlay);
                frame.render_widget(block, overlay);

                input.render(frame, inner);
            }
            Dialog::ConfirmDelete { list, yes } => {
                let overlay = centered_box(50, 6, area);
                frame.render_widget(Clear, overlay);

                let button = |label: &'static str, active: bool, color| {
                    let style = Style::default().fg(color);
                    if active {
                        Span::styled(label, style.add_modifier(Modifier::REVERSED | Modifier::BOLD))
                    } else {
                        Span::styled(label, style)
                    }
                };
                let text = vec![
                    Line::from(format!("Delete list '{list}'?")),
                    Line::default(),
                    Line::from(vec![
                        button(" Yes ", *yes, theme::DANGER),
                        Span::raw("   "),
                        button(" No ", !*yes, theme::ACCENT),
                    ]),
                ];
                let dialog = Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(theme::text())
                    .block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(theme::DANGER))
                            .title(" Confirm "),
                    );
                frame.render_widget(dialog, overlay);
            }
        }
    }
}

/// Blocking error box for a pending `Notice`.
pub struct NoticeBox<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeBox<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    /// Whether `event` acknowledges the notice.
    pub fn dismisses(event: &TuiEvent) -> bool {
        matches!(event, TuiEvent::Submit | TuiEvent::Escape | TuiEvent::InputChar(' '))
    }
}

impl Component for NoticeBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.notice.message.lines().count().max(1) as u16;
        let overlay = centered_box(60, lines + 4, area);
        frame.render_widget(Clear, overlay);

        let dialog = Paragraph::new(self.notice.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(theme::text())
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme::DANGER))
                    .title(format!(" {} ", self.notice.kind))
                    .title_bottom(Line::from(" Enter OK ").centered()),
            );
        frame.render_widget(dialog, overlay);
    }
}

/// A box `percent_x` wide and `height` rows tall, centered in `outer`.
fn centered_box(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(center_v);
    center
}
