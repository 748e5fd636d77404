//! # Overview Screen
//!
//! Every list by name, in store order, with Open / Delete actions plus
//! New List and Exit.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `OverviewState` lives in `TuiState`
//! - `Overview` is created each frame with borrowed state and store

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::store::Store;
use crate::tui::components::truncate_str;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// Persistent state for the overview screen.
#[derive(Default)]
pub struct OverviewState {
    pub selected: usize,
    pub list_state: ListState,
}

/// Events emitted by the overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverviewEvent {
    Open(String),
    /// Ask for confirmation, then delete.
    Delete(String),
    NewList,
    Exit,
}

impl OverviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp the selection after lists were added or removed.
    pub fn sync(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Select the list called `name`, if present.
    pub fn select_name(&mut self, names: &[String], name: &str) {
        if let Some(pos) = names.iter().position(|n| n == name) {
            self.selected = pos;
            self.list_state.select(Some(pos));
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, names: &[String]) -> Option<OverviewEvent> {
        self.sync(names.len());
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(OverviewEvent::Exit),
            TuiEvent::InputChar('n') => Some(OverviewEvent::NewList),
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                if !names.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                if !names.is_empty() {
                    self.selected = (self.selected + 1).min(names.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar('o') => names
                .get(self.selected)
                .map(|name| OverviewEvent::Open(name.clone())),
            TuiEvent::InputChar('d') | TuiEvent::Delete => names
                .get(self.selected)
                .map(|name| OverviewEvent::Delete(name.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the overview screen.
pub struct Overview<'a> {
    state: &'a mut OverviewState,
    store: &'a Store,
}

impl<'a> Overview<'a> {
    pub fn new(state: &'a mut OverviewState, store: &'a Store) -> Self {
        Self { state, store }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.store.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(Span::styled(" Your To-Do Lists ", theme::heading()))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Enter Open  d Delete  n New List  q Exit ").centered())
            .padding(Padding::horizontal(1));

        if self.store.is_empty() {
            let empty = Paragraph::new("No lists yet. Press n to create one.")
                .style(Style::default().fg(theme::MUTED))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .store
            .lists()
            .enumerate()
            .map(|(i, list)| {
                let progress = format!("{}/{} done", list.completed_count(), list.items.len());
                let name_width = inner_width.saturating_sub(progress.len() + 2);
                let name = truncate_str(&list.name, name_width);
                // Pad by display width so wide characters keep the column aligned
                let pad = name_width.saturating_sub(name.width());
                let padded_name = format!("{name}{}", " ".repeat(pad));

                let (name_style, progress_style) = if i == self.state.selected {
                    (theme::selected(), theme::selected())
                } else {
                    (theme::text(), Style::default().fg(theme::MUTED))
                };

                ListItem::new(Line::from(vec![
                    Span::styled(padded_name, name_style),
                    Span::styled("  ", name_style),
                    Span::styled(progress, progress_style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
