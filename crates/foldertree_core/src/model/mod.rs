//! Folder hierarchy domain model.
//!
//! # Responsibility
//! - Define the folder/document records owned by the tree engine.
//! - Provide fixture-friendly constructors that keep parent links consistent.
//!
//! # Invariants
//! - Every folder is identified by a stable `FolderId`.
//! - Children and documents keep insertion order, which is display order.

pub mod document;
pub mod folder;
