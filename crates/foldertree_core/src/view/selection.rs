//! Pending document selection.
//!
//! # Invariants
//! - A non-empty selection always names the folder it was taken from.
//! - Selecting again replaces the previous selection (last write wins).

use crate::model::document::DocumentId;
use crate::model::folder::FolderId;
use serde::{Deserialize, Serialize};

/// Selected document ids plus the folder they were selected in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    document_ids: Vec<DocumentId>,
    source_folder_id: Option<FolderId>,
}

impl Selection {
    /// Builds a selection; an empty id list yields the empty selection.
    pub fn select(document_ids: Vec<DocumentId>, source_folder_id: FolderId) -> Self {
        if document_ids.is_empty() {
            return Self::clear();
        }
        Self {
            document_ids,
            source_folder_id: Some(source_folder_id),
        }
    }

    /// Empty selection with no source folder.
    pub fn clear() -> Self {
        Self::default()
    }

    pub fn document_ids(&self) -> &[DocumentId] {
        &self.document_ids
    }

    pub fn source_folder_id(&self) -> Option<FolderId> {
        self.source_folder_id
    }

    pub fn is_empty(&self) -> bool {
        self.document_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;
    use uuid::Uuid;

    #[test]
    fn later_selection_overwrites_earlier_folder() {
        let folder_a = Uuid::new_v4();
        let folder_b = Uuid::new_v4();
        let doc_a = Uuid::new_v4();
        let doc_b = Uuid::new_v4();

        let first = Selection::select(vec![doc_a], folder_a);
        assert_eq!(first.source_folder_id(), Some(folder_a));
        let selection = Selection::select(vec![doc_b], folder_b);

        assert_eq!(selection.document_ids(), &[doc_b]);
        assert_eq!(selection.source_folder_id(), Some(folder_b));
    }

    #[test]
    fn empty_selection_has_no_source() {
        let selection = Selection::select(Vec::new(), Uuid::new_v4());
        assert!(selection.is_empty());
        assert_eq!(selection.source_folder_id(), None);
        assert_eq!(selection, Selection::clear());
    }
}
