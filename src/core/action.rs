//! # Actions
//!
//! Everything that can happen in Checklist becomes an `Action`.
//! User adds an item? That's `Action::AddItem { .. }`.
//! User dismisses an error box? That's `Action::DismissNotice`.
//!
//! The `update()` function applies an action to the current state and
//! returns an `Effect` telling the event loop what I/O to perform. No
//! side effects here; saving happens in the caller.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, Notice, NoticeKind};
use crate::core::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateList(String),
    /// Dispatched only after the user confirmed.
    DeleteList(String),
    OpenList(String),
    CloseList,
    AddItem { list: String, text: String },
    RemoveItem { list: String, index: usize },
    ToggleItem { list: String, index: usize },
    ClearCompleted(String),
    DismissNotice,
    Quit,
}

/// Side effect requested of the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The store changed and must be written to disk.
    Save,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::CreateList(name) => {
            // Blank names are dropped; anything else is stored as typed
            if name.trim().is_empty() {
                return Effect::None;
            }
            match app.store.create_list(&name) {
                Ok(()) => {
                    info!("Created list {}", name);
                    app.status_message = format!("Created \"{name}\"");
                    Effect::Save
                }
                Err(e @ StoreError::DuplicateListName(_)) => {
                    app.notice = Some(Notice::new(
                        NoticeKind::DuplicateListName,
                        "List name already exists!",
                    ));
                    debug!("{}", e);
                    Effect::None
                }
                Err(e) => stale(e),
            }
        }
        Action::DeleteList(name) => match app.store.delete_list(&name) {
            Ok(list) => {
                info!("Deleted list {} ({} items)", name, list.items.len());
                if app.open_list.as_deref() == Some(name.as_str()) {
                    app.open_list = None;
                }
                app.status_message = format!("Deleted \"{name}\"");
                Effect::Save
            }
            Err(e) => stale(e),
        },
        Action::OpenList(name) => {
            if app.store.contains(&name) {
                app.open_list = Some(name);
                app.status_message.clear();
            } else {
                warn!("Cannot open missing list {}", name);
            }
            Effect::None
        }
        Action::CloseList => {
            app.open_list = None;
            app.status_message.clear();
            Effect::None
        }
        Action::AddItem { list, text } => match app.store.add_item(&list, &text) {
            Ok(true) => Effect::Save,
            Ok(false) => Effect::None,
            Err(e) => stale(e),
        },
        Action::RemoveItem { list, index } => match app.store.remove_item(&list, index) {
            Ok(item) => {
                debug!("Removed {:?} from {}", item.text, list);
                Effect::Save
            }
            Err(e) => stale(e),
        },
        Action::ToggleItem { list, index } => match app.store.toggle_item(&list, index) {
            Ok(_) => Effect::Save,
            Err(e) => stale(e),
        },
        Action::ClearCompleted(list) => match app.store.clear_completed(&list) {
            Ok(removed) => {
                app.status_message = format!("Cleared {removed} completed");
                Effect::Save
            }
            Err(e) => stale(e),
        },
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// An action addressed a list or item that is no longer there.
fn stale(e: StoreError) -> Effect {
    warn!("Dropping stale action: {}", e);
    Effect::None
}
