//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly sequential: draw the current state, wait for one key, turn it
//! into at most one action, apply it, save if the store changed, draw again.
//! Every frame is rebuilt from state; there is no incremental patching.
//!
//! ## Routing
//!
//! 1. Ctrl+C quits from anywhere.
//! 2. A pending notice swallows input until it is dismissed.
//! 3. An open dialog receives everything else.
//! 4. Otherwise the current screen (Detail if a list is open, else Overview).

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::persist;
use crate::core::state::App;
use crate::tui::components::{
    DetailEvent, DetailState, Dialog, DialogEvent, NoticeBox, OverviewEvent, OverviewState,
};
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// Idle wait between redraws when no key arrives.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub overview: OverviewState,
    pub detail: DetailState,
    /// Modal dialog (None = hidden)
    pub dialog: Option<Dialog>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            overview: OverviewState::new(),
            detail: DetailState::new(),
            dialog: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Apply an action and carry out the effect it asks for.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, action: Action) -> bool {
    match update(app, action) {
        Effect::Save => {
            persist::save_app(app);
            false
        }
        Effect::Quit => true,
        Effect::None => false,
    }
}

/// Lists are only ever deleted from the confirmation dialog.
fn request_delete(tui: &mut TuiState, name: String) -> bool {
    tui.dialog = Some(Dialog::confirm_delete(name));
    false
}

/// Route one event. Returns true when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> bool {
    match event {
        TuiEvent::ForceQuit => return dispatch(app, Action::Quit),
        TuiEvent::Resize => return false,
        _ => {}
    }

    if app.notice.is_some() {
        if NoticeBox::dismisses(event) {
            return dispatch(app, Action::DismissNotice);
        }
        return false;
    }

    if let Some(dialog) = tui.dialog.as_mut() {
        let Some(dialog_event) = dialog.handle_event(event) else {
            return false;
        };
        tui.dialog = None;
        return match dialog_event {
            DialogEvent::CreateList(name) => {
                let quit = dispatch(app, Action::CreateList(name.clone()));
                tui.overview.select_name(&app.store.names(), &name);
                quit
            }
            DialogEvent::DeleteList(name) => dispatch(app, Action::DeleteList(name)),
            DialogEvent::Cancel => false,
        };
    }

    if let Some(name) = app.open_list.clone()
        && let Some(list) = app.store.list(&name)
    {
        let Some(detail_event) = tui.detail.handle_event(event, list) else {
            return false;
        };
        return match detail_event {
            DetailEvent::Add(text) => dispatch(app, Action::AddItem { list: name, text }),
            DetailEvent::Toggle(index) => dispatch(app, Action::ToggleItem { list: name, index }),
            DetailEvent::Remove(index) => dispatch(app, Action::RemoveItem { list: name, index }),
            DetailEvent::ClearCompleted => dispatch(app, Action::ClearCompleted(name)),
            DetailEvent::DeleteList => request_delete(tui, name),
            DetailEvent::Back => {
                tui.overview.select_name(&app.store.names(), &name);
                dispatch(app, Action::CloseList)
            }
        };
    }

    let names = app.store.names();
    match tui.overview.handle_event(event, &names) {
        Some(OverviewEvent::Open(name)) => {
            tui.detail = DetailState::new();
            dispatch(app, Action::OpenList(name))
        }
        Some(OverviewEvent::Delete(name)) => request_delete(tui, name),
        Some(OverviewEvent::NewList) => {
            tui.dialog = Some(Dialog::new_list());
            false
        }
        Some(OverviewEvent::Exit) => dispatch(app, Action::Quit),
        None => false,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    debug!("Leaving with {} lists", app.store.len());
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw_ui(f, app, tui))?;

        let Some(event) = poll_event_timeout(POLL_TIMEOUT) else {
            continue;
        };
        if handle_event(app, tui, &event) {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::NoticeKind;
    use crate::core::store::Store;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        App::new(Store::new(), dir.path().join("ModernToDo.json"))
    }

    fn send(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> bool {
        let mut quit = false;
        for event in events {
            quit = handle_event(app, tui, event);
        }
        quit
    }

    fn typed(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    fn create_list(app: &mut App, tui: &mut TuiState, name: &str) {
        send(app, tui, &[TuiEvent::InputChar('n')]);
        send(app, tui, &typed(name));
        send(app, tui, &[TuiEvent::Submit]);
    }

    #[test]
    fn test_new_list_is_created_and_saved() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let mut tui = TuiState::new();

        create_list(&mut app, &mut tui, "Groceries");

        assert!(tui.dialog.is_none());
        assert!(app.store.contains("Groceries"));
        let saved = persist::load(&app.data_path).unwrap();
        assert_eq!(saved.names(), vec!["Groceries"]);
    }

    #[test]
    fn test_duplicate_name_shows_notice_until_dismissed() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let mut tui = TuiState::new();

        create_list(&mut app, &mut tui, "Groceries");
        create_list(&mut app, &mut tui, "Groceries");
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::DuplicateListName);
        assert_eq!(app.store.len(), 1);

        // Other keys are swallowed while the notice is up
        assert!(!send(&mut app, &mut tui, &[TuiEvent::InputChar('q')]));
        assert!(app.notice.is_some());

        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_open_add_toggle_back() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let mut tui = TuiState::new();

        create_list(&mut app, &mut tui, "Work");
        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.open_list.as_deref(), Some("Work"));

        send(&mut app, &mut tui, &typed("Write report"));
        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        send(&mut app, &mut tui, &[TuiEvent::Escape, TuiEvent::InputChar(' ')]);

        let saved = persist::load(&app.data_path).unwrap();
        let item = &saved.list("Work").unwrap().items[0];
        assert_eq!(item.text, "Write report");
        assert!(item.completed);

        send(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert!(app.open_list.is_none());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let mut tui = TuiState::new();
        create_list(&mut app, &mut tui, "Work");

        send(&mut app, &mut tui, &[TuiEvent::InputChar('d')]);
        assert!(tui.dialog.is_some());
        send(&mut app, &mut tui, &[TuiEvent::InputChar('n')]);
        assert!(app.store.contains("Work"));

        send(&mut app, &mut tui, &[TuiEvent::InputChar('d'), TuiEvent::InputChar('y')]);
        assert!(!app.store.contains("Work"));
        assert!(persist::load(&app.data_path).unwrap().is_empty());
    }

    #[test]
    fn test_delete_open_list_returns_to_overview() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let mut tui = TuiState::new();
        create_list(&mut app, &mut tui, "Work");

        send(&mut app, &mut tui, &[TuiEvent::Submit, TuiEvent::Escape, TuiEvent::InputChar('D')]);
        assert!(tui.dialog.is_some());
        assert!(app.store.contains("Work"));

        send(&mut app, &mut tui, &[TuiEvent::InputChar('y')]);
        assert!(app.open_list.is_none());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_delete_keys_never_skip_the_dialog() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let mut tui = TuiState::new();
        create_list(&mut app, &mut tui, "Work");

        // Overview `d`, cancelled with Esc
        send(&mut app, &mut tui, &[TuiEvent::InputChar('d')]);
        assert!(matches!(tui.dialog, Some(Dialog::ConfirmDelete { .. })));
        send(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert!(tui.dialog.is_none());
        assert!(app.store.contains("Work"));

        // Detail `D`, with Enter on the default button
        send(&mut app, &mut tui, &[TuiEvent::Submit, TuiEvent::Escape, TuiEvent::InputChar('D')]);
        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert!(app.store.contains("Work"));
        assert_eq!(app.open_list.as_deref(), Some("Work"));
        assert!(persist::load(&app.data_path).unwrap().contains("Work"));
    }

    #[test]
    fn test_new_list_name_is_kept_as_typed() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let mut tui = TuiState::new();

        create_list(&mut app, &mut tui, " Work ");
        assert_eq!(app.store.names(), vec![" Work "]);
    }

    #[test]
    fn test_exit_and_force_quit() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let mut tui = TuiState::new();
        assert!(send(&mut app, &mut tui, &[TuiEvent::InputChar('q')]));
        assert!(send(&mut app, &mut tui, &[TuiEvent::ForceQuit]));
    }

    #[test]
    fn test_save_failure_keeps_memory() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(Store::new(), dir.path().join("missing").join("ModernToDo.json"));
        let mut tui = TuiState::new();

        create_list(&mut app, &mut tui, "Work");
        assert!(app.store.contains("Work"));
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::SaveFailure);
    }
}
