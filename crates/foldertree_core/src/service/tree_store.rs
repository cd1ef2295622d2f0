//! Folder hierarchy engine.
//!
//! # Responsibility
//! - Own the folder forest as single source of truth, next to expansion,
//!   selection, rename and modal state.
//! - Provide folder create, rename, delete and document move operations.
//!
//! # Invariants
//! - Every operation validates before its first mutation; a failed operation
//!   leaves the whole store unchanged.
//! - Exactly one system folder exists and it is never deleted.
//! - Sibling names stay unique under trimmed, case-insensitive comparison.
//! - Every document belongs to exactly one folder.

use crate::config::StoreOptions;
use crate::model::document::DocumentId;
use crate::model::folder::{Folder, FolderId};
use crate::tree::integrity::{check_forest, IntegrityError};
use crate::tree::locator;
use crate::tree::names::{validate_name, NameError, ReservedNames};
use crate::view::expansion::ExpansionSet;
use crate::view::modal::{ModalController, ModalMode};
use crate::view::selection::Selection;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from folder hierarchy operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeStoreError {
    /// Referenced folder does not exist.
    NotFound(FolderId),
    /// Referenced document is not held by the expected folder.
    DocumentNotFound {
        document_id: DocumentId,
        folder_id: FolderId,
    },
    /// Folder name is blank after trim.
    EmptyName,
    /// Folder name collides with a sibling or reserved name.
    DuplicateName(String),
    /// Folder is the system folder or contains it.
    Forbidden(FolderId),
    /// Fallback folder would be destroyed together with the deleted folder.
    FallbackInsideSubtree {
        folder_id: FolderId,
        fallback_id: FolderId,
    },
    /// Delete confirmation requested while no delete is pending.
    NoPendingDelete,
    /// Tree corruption detected; the operation was aborted.
    Integrity(IntegrityError),
}

impl TreeStoreError {
    /// Stable machine-readable code for logs and view feedback.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::DocumentNotFound { .. } => "document_not_found",
            Self::EmptyName => "empty_name",
            Self::DuplicateName(_) => "duplicate_name",
            Self::Forbidden(_) => "forbidden",
            Self::FallbackInsideSubtree { .. } => "fallback_inside_subtree",
            Self::NoPendingDelete => "no_pending_delete",
            Self::Integrity(_) => "integrity",
        }
    }
}

impl Display for TreeStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "folder not found: {id}"),
            Self::DocumentNotFound {
                document_id,
                folder_id,
            } => write!(f, "document {document_id} not found in folder {folder_id}"),
            Self::EmptyName => write!(f, "folder name must not be blank"),
            Self::DuplicateName(name) => write!(f, "folder name already in use: {name}"),
            Self::Forbidden(id) => write!(f, "system folder cannot be deleted: {id}"),
            Self::FallbackInsideSubtree {
                folder_id,
                fallback_id,
            } => write!(
                f,
                "fallback folder {fallback_id} lies inside deleted folder {folder_id}"
            ),
            Self::NoPendingDelete => write!(f, "no folder delete is awaiting confirmation"),
            Self::Integrity(err) => write!(f, "folder tree corrupted: {err}"),
        }
    }
}

impl Error for TreeStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Integrity(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NameError> for TreeStoreError {
    fn from(value: NameError) -> Self {
        match value {
            NameError::Empty => Self::EmptyName,
            NameError::Duplicate(name) => Self::DuplicateName(name),
        }
    }
}

impl From<IntegrityError> for TreeStoreError {
    fn from(value: IntegrityError) -> Self {
        Self::Integrity(value)
    }
}

/// Result of a document move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Request was trivially satisfied; nothing changed.
    NoOp,
    /// Number of documents moved.
    Moved(usize),
}

/// Owned copy of every state part, for rendering or persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub folders: Vec<Folder>,
    pub system_folder_id: FolderId,
    pub expanded: ExpansionSet,
    pub selection: Selection,
    pub modal: ModalMode,
    pub renaming_folder_id: Option<FolderId>,
}

/// Folder hierarchy engine instance.
///
/// One logical writer owns the store; readers use the accessor methods or
/// [`TreeStore::snapshot`] between operations.
#[derive(Debug, Clone)]
pub struct TreeStore {
    folders: Vec<Folder>,
    system_folder_id: FolderId,
    expanded: ExpansionSet,
    selection: Selection,
    modal: ModalController,
    renaming_folder_id: Option<FolderId>,
    options: StoreOptions,
}

impl TreeStore {
    /// Creates an engine from an existing forest.
    ///
    /// # Errors
    /// Returns the first structural violation found in `folders`.
    pub fn new(folders: Vec<Folder>, options: StoreOptions) -> Result<Self, IntegrityError> {
        let system_folder_id = check_forest(&folders).map_err(|err| {
            error!(
                "event=store_load module=tree_store status=error roots={} detail={}",
                folders.len(),
                err
            );
            err
        })?;
        info!(
            "event=store_load module=tree_store status=ok roots={} system_folder_id={}",
            folders.len(),
            system_folder_id
        );
        Ok(Self {
            folders,
            system_folder_id,
            expanded: ExpansionSet::new(),
            selection: Selection::clear(),
            modal: ModalController::new(),
            renaming_folder_id: None,
            options,
        })
    }

    /// Creates an engine holding only a root-level system folder.
    pub fn bootstrap(
        system_folder_name: impl Into<String>,
        options: StoreOptions,
    ) -> Result<Self, IntegrityError> {
        Self::new(vec![Folder::system(system_folder_name)], options)
    }

    /// Creates one folder under `parent_id`, or at root level for `None`.
    ///
    /// # Errors
    /// - `NotFound` when the parent does not exist.
    /// - `EmptyName` / `DuplicateName` per sibling and reserved names.
    pub fn create_folder(
        &mut self,
        parent_id: Option<FolderId>,
        name: &str,
        reserved: &ReservedNames,
    ) -> Result<FolderId, TreeStoreError> {
        let result = self.try_create_folder(parent_id, name, reserved);
        match &result {
            Ok(folder_id) => info!(
                "event=folder_create module=tree_store status=ok folder_id={} parent_id={}",
                folder_id,
                display_parent(parent_id)
            ),
            Err(err) => log_rejected("folder_create", err),
        }
        result
    }

    fn try_create_folder(
        &mut self,
        parent_id: Option<FolderId>,
        name: &str,
        reserved: &ReservedNames,
    ) -> Result<FolderId, TreeStoreError> {
        if let Some(parent_id) = parent_id {
            self.folder(parent_id)?;
        }
        let siblings = locator::sibling_scope(&self.folders, parent_id).unwrap_or_default();
        let name = validate_name(name, siblings.iter().map(|f| f.name.as_str()), reserved)?;

        let folder = Folder {
            parent_id,
            ..Folder::new(name)
        };
        let folder_id = folder.id;
        match parent_id {
            None => self.folders.push(folder),
            Some(parent_id) => self.folder_mut(parent_id)?.children.push(folder),
        }

        if self.options.expand_created_folders {
            self.expanded.expand(folder_id);
        }
        Ok(folder_id)
    }

    /// Renames one folder.
    ///
    /// The folder is excluded from its own sibling set, so changing only
    /// letter case or surrounding whitespace is accepted.
    ///
    /// # Errors
    /// - `NotFound` when `folder_id` does not exist.
    /// - `EmptyName` / `DuplicateName` per sibling and reserved names.
    pub fn rename_folder(
        &mut self,
        folder_id: FolderId,
        new_name: &str,
        reserved: &ReservedNames,
    ) -> Result<(), TreeStoreError> {
        let result = self.try_rename_folder(folder_id, new_name, reserved);
        match &result {
            Ok(()) => info!(
                "event=folder_rename module=tree_store status=ok folder_id={}",
                folder_id
            ),
            Err(err) => log_rejected("folder_rename", err),
        }
        result
    }

    fn try_rename_folder(
        &mut self,
        folder_id: FolderId,
        new_name: &str,
        reserved: &ReservedNames,
    ) -> Result<(), TreeStoreError> {
        let folder = self.folder(folder_id)?;
        let siblings = locator::sibling_scope(&self.folders, folder.parent_id).ok_or_else(|| {
            integrity_fault(IntegrityError::ParentMismatch {
                folder_id,
                expected: None,
                actual: folder.parent_id,
            })
        })?;
        let name = validate_name(
            new_name,
            siblings
                .iter()
                .filter(|sibling| sibling.id != folder_id)
                .map(|sibling| sibling.name.as_str()),
            reserved,
        )?;

        self.folder_mut(folder_id)?.name = name;
        if self.renaming_folder_id == Some(folder_id) {
            self.renaming_folder_id = None;
        }
        Ok(())
    }

    /// Deletes one folder subtree and hands all its documents to `fallback_id`.
    ///
    /// Documents from the folder and every descendant are appended to the
    /// fallback folder in pre-order; sub-folders are discarded.
    ///
    /// # Errors
    /// - `NotFound` when either folder does not exist.
    /// - `Forbidden` when the subtree is or contains the system folder.
    /// - `FallbackInsideSubtree` when the fallback would be deleted too.
    /// - `Integrity` when a moved document already sits in the fallback.
    pub fn delete_folder(
        &mut self,
        folder_id: FolderId,
        fallback_id: FolderId,
    ) -> Result<(), TreeStoreError> {
        let result = self.try_delete_folder(folder_id, fallback_id);
        match &result {
            Ok((removed, moved)) => info!(
                "event=folder_delete module=tree_store status=ok folder_id={} fallback_id={} removed_folders={} moved_documents={}",
                folder_id, fallback_id, removed, moved
            ),
            Err(err) => log_rejected("folder_delete", err),
        }
        result.map(|_| ())
    }

    fn try_delete_folder(
        &mut self,
        folder_id: FolderId,
        fallback_id: FolderId,
    ) -> Result<(usize, usize), TreeStoreError> {
        let target = self.folder(folder_id)?;
        let fallback = self.folder(fallback_id)?;
        self.ensure_deletable(target)?;
        if locator::subtree_contains(target, fallback_id) {
            return Err(TreeStoreError::FallbackInsideSubtree {
                folder_id,
                fallback_id,
            });
        }

        let incoming = target.collect_documents();
        if let Some(clash) = incoming
            .iter()
            .find(|doc| fallback.contains_document(doc.id))
        {
            return Err(integrity_fault(IntegrityError::DuplicateDocumentId(
                clash.id,
            )));
        }
        let removed_ids = target.subtree_ids();
        let moved = incoming.len();

        let fallback = self.folder_mut(fallback_id)?;
        let previous_len = fallback.documents.len();
        fallback.documents.extend(incoming);
        if locator::detach(&mut self.folders, folder_id).is_none() {
            if let Some(fallback) = locator::find_mut(&mut self.folders, fallback_id) {
                fallback.documents.truncate(previous_len);
            }
            return Err(TreeStoreError::NotFound(folder_id));
        }

        if self.options.prune_view_state_on_delete {
            self.prune_view_state(&removed_ids);
        }
        Ok((removed_ids.len(), moved))
    }

    fn prune_view_state(&mut self, removed_ids: &[FolderId]) {
        self.expanded.forget(removed_ids);
        let removed = |id: Option<FolderId>| id.is_some_and(|id| removed_ids.contains(&id));
        if removed(self.renaming_folder_id) {
            self.renaming_folder_id = None;
        }
        if removed(self.selection.source_folder_id()) {
            self.selection = Selection::clear();
        }
        if removed(self.modal.pending_delete()) {
            self.modal.cancel();
        }
    }

    /// Moves documents from `source_id` to `target_id` and clears the selection.
    ///
    /// Moved documents keep their relative order from the source folder and
    /// are appended after the target's existing documents.
    ///
    /// Returns `MoveOutcome::NoOp` without touching any state when
    /// `document_ids` is empty or source and target are the same folder.
    ///
    /// # Errors
    /// - `NotFound` when either folder does not exist.
    /// - `DocumentNotFound` when a requested document is not in the source.
    /// - `Integrity` when a requested document already sits in the target.
    pub fn move_documents(
        &mut self,
        document_ids: &[DocumentId],
        source_id: FolderId,
        target_id: FolderId,
    ) -> Result<MoveOutcome, TreeStoreError> {
        let result = self.try_move_documents(document_ids, source_id, target_id);
        match &result {
            Ok(MoveOutcome::Moved(count)) => info!(
                "event=documents_move module=tree_store status=ok source_id={} target_id={} count={}",
                source_id, target_id, count
            ),
            Ok(MoveOutcome::NoOp) => debug!(
                "event=documents_move module=tree_store status=noop source_id={} target_id={}",
                source_id, target_id
            ),
            Err(err) => log_rejected("documents_move", err),
        }
        result
    }

    fn try_move_documents(
        &mut self,
        document_ids: &[DocumentId],
        source_id: FolderId,
        target_id: FolderId,
    ) -> Result<MoveOutcome, TreeStoreError> {
        if document_ids.is_empty() || source_id == target_id {
            return Ok(MoveOutcome::NoOp);
        }

        let source = self.folder(source_id)?;
        let target = self.folder(target_id)?;
        if let Some(missing) = document_ids
            .iter()
            .find(|id| !source.contains_document(**id))
        {
            return Err(TreeStoreError::DocumentNotFound {
                document_id: *missing,
                folder_id: source_id,
            });
        }
        if let Some(clash) = document_ids
            .iter()
            .find(|id| target.contains_document(**id))
        {
            return Err(integrity_fault(IntegrityError::DuplicateDocumentId(*clash)));
        }

        let requested: HashSet<DocumentId> = document_ids.iter().copied().collect();
        let source = self.folder_mut(source_id)?;
        let (moving, staying): (Vec<_>, Vec<_>) = std::mem::take(&mut source.documents)
            .into_iter()
            .partition(|doc| requested.contains(&doc.id));
        source.documents = staying;
        let moved = moving.len();
        self.folder_mut(target_id)?.documents.extend(moving);

        self.selection = Selection::clear();
        Ok(MoveOutcome::Moved(moved))
    }

    /// Moves the current selection into `target_id`.
    ///
    /// An empty selection is a no-op.
    pub fn move_selected(&mut self, target_id: FolderId) -> Result<MoveOutcome, TreeStoreError> {
        let Some(source_id) = self.selection.source_folder_id() else {
            return Ok(MoveOutcome::NoOp);
        };
        let document_ids = self.selection.document_ids().to_vec();
        self.move_documents(&document_ids, source_id, target_id)
    }

    /// Replaces the selection (last write wins across folders).
    pub fn select_documents(&mut self, document_ids: Vec<DocumentId>, source_id: FolderId) {
        self.selection = Selection::select(document_ids, source_id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::clear();
    }

    /// Flips expansion for `folder_id` and returns whether it is now expanded.
    ///
    /// The id is not validated against the tree.
    pub fn toggle_expand(&mut self, folder_id: FolderId) -> bool {
        self.expanded.toggle(folder_id)
    }

    /// Puts one folder in inline rename mode.
    pub fn begin_rename(&mut self, folder_id: FolderId) -> Result<(), TreeStoreError> {
        self.folder(folder_id)?;
        self.renaming_folder_id = Some(folder_id);
        Ok(())
    }

    pub fn cancel_rename(&mut self) {
        self.renaming_folder_id = None;
    }

    /// Opens the delete confirmation for `folder_id`.
    ///
    /// Returns `Ok(false)` when another modal is already open.
    ///
    /// # Errors
    /// - `NotFound` when the folder does not exist.
    /// - `Forbidden` when the folder is or contains the system folder.
    pub fn request_delete(&mut self, folder_id: FolderId) -> Result<bool, TreeStoreError> {
        let folder = self.folder(folder_id)?;
        self.ensure_deletable(folder)?;
        let is_system = folder.is_system;
        Ok(self.modal.request_delete(folder_id, is_system))
    }

    /// Deletes the folder awaiting confirmation into the system folder.
    ///
    /// On failure both the modal and the tree stay unchanged.
    pub fn confirm_delete(&mut self) -> Result<FolderId, TreeStoreError> {
        let folder_id = self
            .modal
            .pending_delete()
            .ok_or(TreeStoreError::NoPendingDelete)?;
        self.delete_folder(folder_id, self.system_folder_id)?;
        self.modal.confirm();
        Ok(folder_id)
    }

    /// Shows the duplicate-name warning. Returns whether it opened.
    pub fn warn_duplicate_name(&mut self) -> bool {
        self.modal.warn_duplicate_name()
    }

    /// Closes any modal without touching the tree.
    pub fn cancel_modal(&mut self) {
        self.modal.cancel();
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn find_folder(&self, folder_id: FolderId) -> Option<&Folder> {
        locator::find(&self.folders, folder_id)
    }

    pub fn system_folder_id(&self) -> FolderId {
        self.system_folder_id
    }

    /// Returns folder names in one sibling scope, or `None` for an unknown parent.
    pub fn sibling_names(&self, parent_id: Option<FolderId>) -> Option<Vec<&str>> {
        locator::sibling_scope(&self.folders, parent_id)
            .map(|siblings| siblings.iter().map(|f| f.name.as_str()).collect())
    }

    pub fn expanded(&self) -> &ExpansionSet {
        &self.expanded
    }

    pub fn is_expanded(&self, folder_id: FolderId) -> bool {
        self.expanded.contains(folder_id)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn modal_mode(&self) -> ModalMode {
        self.modal.mode()
    }

    pub fn renaming_folder(&self) -> Option<FolderId> {
        self.renaming_folder_id
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            folders: self.folders.clone(),
            system_folder_id: self.system_folder_id,
            expanded: self.expanded.clone(),
            selection: self.selection.clone(),
            modal: self.modal.mode(),
            renaming_folder_id: self.renaming_folder_id,
        }
    }

    fn folder(&self, folder_id: FolderId) -> Result<&Folder, TreeStoreError> {
        locator::find(&self.folders, folder_id).ok_or(TreeStoreError::NotFound(folder_id))
    }

    fn folder_mut(&mut self, folder_id: FolderId) -> Result<&mut Folder, TreeStoreError> {
        locator::find_mut(&mut self.folders, folder_id).ok_or(TreeStoreError::NotFound(folder_id))
    }

    fn ensure_deletable(&self, folder: &Folder) -> Result<(), TreeStoreError> {
        if folder.is_system || locator::subtree_contains(folder, self.system_folder_id) {
            return Err(TreeStoreError::Forbidden(folder.id));
        }
        Ok(())
    }
}

fn display_parent(parent_id: Option<FolderId>) -> String {
    match parent_id {
        Some(id) => id.to_string(),
        None => "root".to_string(),
    }
}

fn integrity_fault(err: IntegrityError) -> TreeStoreError {
    error!(
        "event=integrity_fault module=tree_store status=error detail={}",
        err
    );
    TreeStoreError::Integrity(err)
}

fn log_rejected(event: &str, err: &TreeStoreError) {
    debug!(
        "event={} module=tree_store status=rejected reason={}",
        event,
        err.code()
    );
}
