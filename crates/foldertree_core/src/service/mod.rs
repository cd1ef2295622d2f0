//! Core use-case services.
//!
//! # Responsibility
//! - Compose tree helpers and view trackers into atomic engine operations.
//! - Keep view and persistence layers decoupled from tree internals.

pub mod tree_store;
