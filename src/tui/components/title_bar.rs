//! # TitleBar Component
//!
//! Top status bar: app name, where the data is saved, and the latest status
//! message.
//!
//! Purely presentational; it receives all data as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.data_path.display().to_string(), app.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```
//!
//! Status text is shown only when there is some:
//!
//! 1. **Status message**: `"Checklist (~/Documents/ModernToDo.json) | Created \"Work\""`
//! 2. **Default**: `"Checklist (~/Documents/ModernToDo.json)"`

use crate::tui::component::Component;
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Where the store is saved
    pub data_path: String,
    /// Status message (e.g. "Cleared 2 completed")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(data_path: String, status_message: String) -> Self {
        Self {
            data_path,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Checklist ({})", self.data_path)
        } else {
            format!("Checklist ({}) | {}", self.data_path, self.status_message)
        };

        frame.render_widget(Span::styled(title_text, theme::text()), area);
    }
}
