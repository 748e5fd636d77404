//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use log::LevelFilter;
use tempfile::TempDir;

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::store::Store;

/// A resolved config whose data file lives inside `dir`.
pub fn test_config(dir: &TempDir) -> ResolvedConfig {
    ResolvedConfig {
        data_file: dir.path().join("ModernToDo.json"),
        log_level: LevelFilter::Off,
        log_file: None,
    }
}

/// An app with "Work" holding A (open), B (done), C (open) and an empty "Home".
pub fn test_app() -> App {
    let mut store = Store::new();
    store.create_list("Work").unwrap();
    for text in ["A", "B", "C"] {
        store.add_item("Work", text).unwrap();
    }
    store.toggle_item("Work", 1).unwrap();
    store.create_list("Home").unwrap();
    App::new(store, "unused.json".into())
}
