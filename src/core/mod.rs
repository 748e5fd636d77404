//! # Core Application Logic
//!
//! This module contains Checklist's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (lists/items)  │
//!                    │  • App (state)          │
//!                    │  • Action + update()    │
//!                    │  • persist (JSON file)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`]: `Store`, `TodoList`, `Item` and their operations
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`persist`]: Loading and saving the store
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod config;
pub mod persist;
pub mod state;
pub mod store;
