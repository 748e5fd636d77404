//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing the data file and status
//! - `NoticeBox`: Blocking error message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: Single-line text field
//! - `Overview` / `OverviewState`: All lists
//! - `Detail` / `DetailState`: One list's items
//! - `Dialog`: New-list prompt and delete confirmation
//!
//! Stateful screens follow the persistent state + transient wrapper pattern:
//! the `*State` struct lives in `TuiState` across frames, and a wrapper
//! borrowing it plus the core data it shows is built every frame. Components
//! never reach into `App` themselves; the data they show is passed in.

pub mod detail;
pub mod dialog;
pub mod input_box;
pub mod overview;
mod title_bar;

pub use detail::{Detail, DetailEvent, DetailState};
pub use dialog::{Dialog, DialogEvent, NoticeBox};
pub use overview::{Overview, OverviewEvent, OverviewState};
pub use title_bar::TitleBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
