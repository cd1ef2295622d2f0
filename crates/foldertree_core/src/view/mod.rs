//! View-side state kept next to the folder tree.
//!
//! # Responsibility
//! - Track expanded folders, the pending document selection and modal mode.
//!
//! # Invariants
//! - None of these trackers own folder data; they only hold identifiers.
//! - Ids pointing at folders no longer in the tree are harmless.

pub mod expansion;
pub mod modal;
pub mod selection;
