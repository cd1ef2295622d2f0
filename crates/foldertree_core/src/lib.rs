//! Core folder hierarchy engine.
//! This crate is the single source of truth for folder tree invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod tree;
pub mod view;

pub use config::{ConfigError, StoreOptions};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::document::{Document, DocumentId};
pub use model::folder::{Folder, FolderId};
pub use service::tree_store::{MoveOutcome, StoreSnapshot, TreeStore, TreeStoreError};
pub use tree::integrity::IntegrityError;
pub use tree::names::{is_duplicate, validate_name, NameError, ReservedNames};
pub use view::expansion::ExpansionSet;
pub use view::modal::{ModalController, ModalMode};
pub use view::selection::Selection;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
