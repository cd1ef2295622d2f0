//! Structural integrity checks for a folder forest.
//!
//! # Responsibility
//! - Verify tree invariants when a forest enters the engine.
//! - Describe corruption detected mid-operation.
//!
//! # Invariants
//! - A failed check never mutates the forest.

use crate::model::document::DocumentId;
use crate::model::folder::{Folder, FolderId};
use crate::tree::names::comparison_key;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Structural corruption in a folder forest.
///
/// These indicate a bug upstream of the engine, not a user mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// Two folders share one id (a folder reachable twice is a cycle).
    DuplicateFolderId(FolderId),
    /// One document id is held by two folders, or twice by one folder.
    DuplicateDocumentId(DocumentId),
    /// A folder's `parent_id` disagrees with where it is nested.
    ParentMismatch {
        folder_id: FolderId,
        expected: Option<FolderId>,
        actual: Option<FolderId>,
    },
    /// The forest must hold exactly one system folder.
    SystemFolderCount(usize),
    /// Two siblings share a name under case-insensitive comparison.
    SiblingNameCollision {
        parent_id: Option<FolderId>,
        name: String,
    },
    /// A folder name is blank after trim.
    BlankFolderName(FolderId),
}

impl Display for IntegrityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateFolderId(id) => write!(f, "folder id appears more than once: {id}"),
            Self::DuplicateDocumentId(id) => {
                write!(f, "document id appears more than once: {id}")
            }
            Self::ParentMismatch {
                folder_id,
                expected,
                actual,
            } => write!(
                f,
                "folder {folder_id} has parent link {} but is nested under {}",
                display_parent(*actual),
                display_parent(*expected)
            ),
            Self::SystemFolderCount(count) => {
                write!(f, "expected exactly one system folder, found {count}")
            }
            Self::SiblingNameCollision { parent_id, name } => write!(
                f,
                "sibling folders under {} share name `{name}`",
                display_parent(*parent_id)
            ),
            Self::BlankFolderName(id) => write!(f, "folder name is blank: {id}"),
        }
    }
}

impl Error for IntegrityError {}

fn display_parent(parent_id: Option<FolderId>) -> String {
    match parent_id {
        Some(id) => id.to_string(),
        None => "root".to_string(),
    }
}

/// Checks every forest invariant and returns the system folder id.
///
/// # Errors
/// Returns the first violation found in pre-order.
pub fn check_forest(roots: &[Folder]) -> Result<FolderId, IntegrityError> {
    let mut state = CheckState::default();
    check_level(roots, None, &mut state)?;

    match state.system_ids.as_slice() {
        [system_id] => Ok(*system_id),
        other => Err(IntegrityError::SystemFolderCount(other.len())),
    }
}

#[derive(Default)]
struct CheckState {
    folder_ids: HashSet<FolderId>,
    document_ids: HashSet<DocumentId>,
    system_ids: Vec<FolderId>,
}

fn check_level(
    folders: &[Folder],
    parent_id: Option<FolderId>,
    state: &mut CheckState,
) -> Result<(), IntegrityError> {
    let mut sibling_keys = HashSet::new();
    for folder in folders {
        if !state.folder_ids.insert(folder.id) {
            return Err(IntegrityError::DuplicateFolderId(folder.id));
        }
        if folder.parent_id != parent_id {
            return Err(IntegrityError::ParentMismatch {
                folder_id: folder.id,
                expected: parent_id,
                actual: folder.parent_id,
            });
        }
        let key = comparison_key(&folder.name);
        if key.is_empty() {
            return Err(IntegrityError::BlankFolderName(folder.id));
        }
        if !sibling_keys.insert(key) {
            return Err(IntegrityError::SiblingNameCollision {
                parent_id,
                name: folder.name.clone(),
            });
        }
        if folder.is_system {
            state.system_ids.push(folder.id);
        }
        for document in &folder.documents {
            if !state.document_ids.insert(document.id) {
                return Err(IntegrityError::DuplicateDocumentId(document.id));
            }
        }
        check_level(&folder.children, Some(folder.id), state)?;
    }
    Ok(())
}
