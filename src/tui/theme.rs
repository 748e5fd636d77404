//! Dark color palette shared by every screen and dialog.

use ratatui::style::{Color, Modifier, Style};

pub const FG: Color = Color::Rgb(0xe6, 0xe6, 0xe6);
pub const ACCENT: Color = Color::Rgb(0x2a, 0x8c, 0xff);
pub const DANGER: Color = Color::Rgb(0xff, 0x4d, 0x4d);
pub const SUCCESS: Color = Color::Rgb(0x2e, 0xcc, 0x71);
pub const CARD_BG: Color = Color::Rgb(0x2a, 0x2a, 0x2a);
pub const MUTED: Color = Color::DarkGray;

pub fn text() -> Style {
    Style::default().fg(FG)
}

pub fn heading() -> Style {
    Style::default().fg(FG).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(MUTED)
}

pub fn selected() -> Style {
    Style::default()
        .fg(FG)
        .bg(CARD_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn completed() -> Style {
    Style::default()
        .fg(MUTED)
        .add_modifier(Modifier::CROSSED_OUT)
}
