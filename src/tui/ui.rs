use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Detail, NoticeBox, Overview, TitleBar};

/// Draw the whole frame from current state. Nothing is retained between
/// frames except the persistent component states in `TuiState`.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TitleBar::new(
        app.data_path.display().to_string(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    let overlay_open = tui.dialog.is_some() || app.notice.is_some();
    match app.open_list.as_deref().and_then(|name| app.store.list(name)) {
        Some(list) => Detail::new(&mut tui.detail, list)
            .active(!overlay_open)
            .render(frame, main_area),
        None => Overview::new(&mut tui.overview, &app.store).render(frame, main_area),
    }

    if let Some(dialog) = tui.dialog.as_mut() {
        dialog.render(frame, main_area);
    }

    // Notices sit above everything, including an open dialog
    if let Some(notice) = &app.notice {
        NoticeBox::new(notice).render(frame, frame.area());
    }
}
