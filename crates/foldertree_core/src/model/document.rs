//! Document reference held by folders.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable document identifier, unique across the whole tree.
pub type DocumentId = Uuid;

/// Document entry placed inside exactly one folder.
///
/// Content lives outside the engine; only identity and label are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
}

impl Document {
    /// Creates a document entry with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a document entry with a caller-provided id.
    ///
    /// Used when the document already exists in an external catalog.
    pub fn with_id(id: DocumentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
