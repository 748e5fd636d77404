//! # Persistence
//!
//! Load/save the whole store to `~/Documents/ModernToDo.json`.
//!
//! The file is rewritten in full after every mutation. Writes go through a
//! `.tmp` sibling and `rename()` so a crash never leaves a truncated file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::state::{App, Notice, NoticeKind};
use crate::core::store::Store;

const DATA_DIR: &str = "Documents";
const DATA_FILE: &str = "ModernToDo.json";

#[derive(Debug)]
pub enum PersistError {
    /// The file exists but could not be read or parsed.
    LoadFailure(io::Error),
    SaveFailure(io::Error),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::LoadFailure(e) => write!(f, "Could not load data:\n{e}"),
            PersistError::SaveFailure(e) => write!(f, "Could not save data:\n{e}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::LoadFailure(e) | PersistError::SaveFailure(e) => Some(e),
        }
    }
}

/// Returns `~/Documents/ModernToDo.json`.
pub fn default_data_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(DATA_DIR).join(DATA_FILE))
}

/// Make sure the directory holding the data file exists.
pub fn ensure_parent_dir(path: &Path) {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create data directory {}: {}", parent.display(), e);
    }
}

/// Load the store from `path`. A missing file is an empty store.
pub fn load(path: &Path) -> Result<Store, PersistError> {
    if !path.exists() {
        info!("No data file at {}, starting empty", path.display());
        return Ok(Store::new());
    }

    let json = fs::read_to_string(path).map_err(PersistError::LoadFailure)?;
    let store: Store = serde_json::from_str(&json)
        .map_err(|e| PersistError::LoadFailure(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    info!("Loaded {} lists from {}", store.len(), path.display());
    Ok(store)
}

/// Serialize with four-space indentation.
pub fn to_json(store: &Store) -> io::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    store
        .serialize(&mut serializer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// The file a save actually replaces. An existing path is resolved through
/// any symlinks so the link itself is left in place.
fn write_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Atomically write `contents` to `path` (via `.tmp` + rename).
///
/// The temp file sits next to the resolved target and takes over its
/// permissions before the rename.
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let target = write_target(path);
    let tmp_path = target.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    if let Ok(meta) = fs::metadata(&target)
        && let Err(e) = fs::set_permissions(&tmp_path, meta.permissions())
    {
        warn!("Could not copy permissions to {}: {}", tmp_path.display(), e);
    }
    if let Err(e) = fs::rename(&tmp_path, &target) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

/// Overwrite `path` with the full store.
pub fn save(path: &Path, store: &Store) -> Result<(), PersistError> {
    let json = to_json(store).map_err(PersistError::SaveFailure)?;
    atomic_write(path, &json).map_err(PersistError::SaveFailure)?;
    debug!("Saved {} lists to {}", store.len(), path.display());
    Ok(())
}

/// Save the app's store to its data path. This is the single entry point for
/// persistence from the event loop; a failure becomes a notice and the
/// in-memory store is left as it is.
pub fn save_app(app: &mut App) {
    if let Err(e) = save(&app.data_path, &app.store) {
        warn!("Failed to save {}: {}", app.data_path.display(), e);
        app.notice = Some(Notice::new(NoticeKind::SaveFailure, e.to_string()));
    }
}
