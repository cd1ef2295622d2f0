//! Folder node model.
//!
//! # Responsibility
//! - Define the owned recursive folder node.
//! - Offer builders for seeding a tree from an external snapshot or fixtures.
//!
//! # Invariants
//! - `parent_id` of every child equals the id of the folder owning it.
//! - `is_system` marks the single fallback folder; it is never deleted.
//! - `id` is stable for the node lifetime and never reused.

use crate::model::document::{Document, DocumentId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable folder identifier.
pub type FolderId = Uuid;

/// One node of the folder hierarchy.
///
/// Children and documents are owned exclusively by this node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    /// `None` for root-level folders.
    pub parent_id: Option<FolderId>,
    pub children: Vec<Folder>,
    pub documents: Vec<Document>,
    /// Marks the fallback folder that absorbs documents of deleted folders.
    #[serde(default)]
    pub is_system: bool,
}

impl Folder {
    /// Creates an empty root-level folder with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an empty root-level folder with a caller-provided id.
    pub fn with_id(id: FolderId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: None,
            children: Vec::new(),
            documents: Vec::new(),
            is_system: false,
        }
    }

    /// Creates the fallback folder.
    pub fn system(name: impl Into<String>) -> Self {
        let mut folder = Self::new(name);
        folder.is_system = true;
        folder
    }

    /// Appends `child` and rewrites its parent link to this folder.
    pub fn with_child(mut self, mut child: Folder) -> Self {
        child.parent_id = Some(self.id);
        self.children.push(child);
        self
    }

    /// Appends documents in the given order.
    pub fn with_documents(mut self, documents: impl IntoIterator<Item = Document>) -> Self {
        self.documents.extend(documents);
        self
    }

    /// Returns whether this folder holds a document with `document_id`.
    pub fn contains_document(&self, document_id: DocumentId) -> bool {
        self.documents.iter().any(|doc| doc.id == document_id)
    }

    /// Visits this folder and every descendant in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Folder)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Returns ids of this folder and all descendants, pre-order.
    pub fn subtree_ids(&self) -> Vec<FolderId> {
        let mut ids = Vec::new();
        self.walk(&mut |folder| ids.push(folder.id));
        ids
    }

    /// Returns every document held in this subtree.
    ///
    /// Order is pre-order by folder, then insertion order within each folder.
    pub fn collect_documents(&self) -> Vec<Document> {
        let mut collected = Vec::new();
        self.walk(&mut |folder| collected.extend(folder.documents.iter().cloned()));
        collected
    }
}

#[cfg(test)]
mod tests {
    use super::Folder;
    use crate::model::document::Document;

    #[test]
    fn with_child_sets_parent_link() {
        let child = Folder::new("Child");
        let parent = Folder::new("Parent").with_child(child);
        assert_eq!(parent.children[0].parent_id, Some(parent.id));
    }

    #[test]
    fn collect_documents_flattens_in_pre_order() {
        let a = Document::new("a");
        let b = Document::new("b");
        let c = Document::new("c");
        let folder = Folder::new("Top")
            .with_documents([a.clone()])
            .with_child(Folder::new("Nested").with_documents([b.clone()]))
            .with_documents([c.clone()]);

        let ids: Vec<_> = folder.collect_documents().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![a.id, c.id, b.id]);
    }

    #[test]
    fn subtree_ids_lists_self_first() {
        let leaf = Folder::new("Leaf");
        let leaf_id = leaf.id;
        let top = Folder::new("Top").with_child(Folder::new("Mid").with_child(leaf));
        let ids = top.subtree_ids();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], top.id);
        assert_eq!(ids[2], leaf_id);
    }
}
