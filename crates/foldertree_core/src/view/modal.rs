//! Confirmation modal state machine.
//!
//! # Invariants
//! - `ConfirmDelete` is only entered from `Idle` and never for the system folder.
//! - Leaving any modal state never touches the tree by itself.

use crate::model::folder::FolderId;
use serde::{Deserialize, Serialize};

/// Interaction mode shown on top of the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "folder_id")]
pub enum ModalMode {
    #[default]
    Idle,
    /// Waiting for the user to confirm deletion of one folder.
    ConfirmDelete(FolderId),
    /// Informing the user that a folder name is already taken.
    DuplicateNameWarning,
}

/// Owns the current modal mode and its allowed transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    mode: ModalMode,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    /// `Idle -> ConfirmDelete(folder_id)` for non-system folders.
    ///
    /// Returns whether the transition happened.
    pub fn request_delete(&mut self, folder_id: FolderId, is_system: bool) -> bool {
        if is_system || self.mode != ModalMode::Idle {
            return false;
        }
        self.mode = ModalMode::ConfirmDelete(folder_id);
        true
    }

    /// Returns the folder awaiting confirmation, if any, without leaving the mode.
    pub fn pending_delete(&self) -> Option<FolderId> {
        match self.mode {
            ModalMode::ConfirmDelete(folder_id) => Some(folder_id),
            _ => None,
        }
    }

    /// `ConfirmDelete(id) -> Idle`, returning `id` for the caller to delete.
    pub fn confirm(&mut self) -> Option<FolderId> {
        let target = self.pending_delete()?;
        self.mode = ModalMode::Idle;
        Some(target)
    }

    /// `Idle -> DuplicateNameWarning`. Returns whether the transition happened.
    pub fn warn_duplicate_name(&mut self) -> bool {
        if self.mode != ModalMode::Idle {
            return false;
        }
        self.mode = ModalMode::DuplicateNameWarning;
        true
    }

    /// Any mode -> `Idle`.
    pub fn cancel(&mut self) {
        self.mode = ModalMode::Idle;
    }
}
