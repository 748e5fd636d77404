//! # Application State
//!
//! Core business state for Checklist. Domain data only, no TUI types;
//! selection, input buffers and dialogs live in the `tui` module.
//!
//! ```text
//! App
//! ├── store: Store                 // every list and item
//! ├── data_path: PathBuf           // where the store is saved
//! ├── open_list: Option<String>    // None = Overview, Some = Detail
//! ├── notice: Option<Notice>       // blocking error message
//! └── status_message: String       // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;
use std::path::PathBuf;

use log::warn;

use crate::core::config::ResolvedConfig;
use crate::core::persist;
use crate::core::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    LoadFailure,
    SaveFailure,
    DuplicateListName,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeKind::LoadFailure => f.write_str("Load Error"),
            NoticeKind::SaveFailure => f.write_str("Save Error"),
            NoticeKind::DuplicateListName => f.write_str("Error"),
        }
    }
}

/// A message the user has to acknowledge before doing anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub struct App {
    pub store: Store,
    pub data_path: PathBuf,
    /// The list shown in the Detail screen.
    pub open_list: Option<String>,
    pub notice: Option<Notice>,
    pub status_message: String,
}

impl App {
    pub fn new(store: Store, data_path: PathBuf) -> Self {
        Self {
            store,
            data_path,
            open_list: None,
            notice: None,
            status_message: String::new(),
        }
    }

    /// Build the app from resolved config, loading the data file.
    ///
    /// A load failure starts with an empty store and a pending notice.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        persist::ensure_parent_dir(&config.data_file);
        let (store, notice) = match persist::load(&config.data_file) {
            Ok(store) => (store, None),
            Err(e) => {
                warn!("{}", e);
                (
                    Store::new(),
                    Some(Notice::new(NoticeKind::LoadFailure, e.to_string())),
                )
            }
        };

        let mut app = Self::new(store, config.data_file.clone());
        app.notice = notice;
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(Store::new(), PathBuf::from("todo.json"));
        assert!(app.open_list.is_none());
        assert!(app.notice.is_none());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_from_config_loads_existing_file() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        fs::write(&config.data_file, r#"{"Work": [{"text": "A", "completed": false}]}"#).unwrap();

        let app = App::from_config(&config);
        assert!(app.notice.is_none());
        assert_eq!(app.store.names(), vec!["Work"]);
    }

    #[test]
    fn test_from_config_load_failure_starts_empty() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        fs::write(&config.data_file, "[1, 2, 3]").unwrap();

        let app = App::from_config(&config);
        assert!(app.store.is_empty());
        assert_eq!(app.notice.unwrap().kind, NoticeKind::LoadFailure);
    }

    #[test]
    fn test_from_config_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.data_file = dir.path().join("Documents").join("ModernToDo.json");

        let app = App::from_config(&config);
        assert!(app.store.is_empty());
        assert!(dir.path().join("Documents").is_dir());
    }
}
