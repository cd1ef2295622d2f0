//! Expanded-folder bookkeeping.

use crate::model::folder::FolderId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of folder ids currently expanded in the view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionSet {
    ids: BTreeSet<FolderId>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `id` flipped: added if absent, removed if present.
    pub fn toggled(mut self, id: FolderId) -> Self {
        self.toggle(id);
        self
    }

    /// Flips `id` in place and returns whether it is now expanded.
    pub fn toggle(&mut self, id: FolderId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Marks `id` expanded without flipping an existing entry.
    pub fn expand(&mut self, id: FolderId) {
        self.ids.insert(id);
    }

    pub fn contains(&self, id: FolderId) -> bool {
        self.ids.contains(&id)
    }

    /// Drops every id in `removed`.
    pub fn forget<'a>(&mut self, removed: impl IntoIterator<Item = &'a FolderId>) {
        for id in removed {
            self.ids.remove(id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FolderId> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::ExpansionSet;
    use uuid::Uuid;

    #[test]
    fn toggle_twice_restores_original_set() {
        let kept = Uuid::new_v4();
        let flipped = Uuid::new_v4();
        let original = ExpansionSet::new().toggled(kept);

        let restored = original.clone().toggled(flipped).toggled(flipped);
        assert_eq!(restored, original);
    }

    #[test]
    fn toggle_reports_new_state() {
        let id = Uuid::new_v4();
        let mut set = ExpansionSet::new();
        assert!(set.toggle(id));
        assert!(set.contains(id));
        assert!(!set.toggle(id));
        assert!(set.is_empty());
    }

    #[test]
    fn forget_removes_only_listed_ids() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut set = ExpansionSet::new().toggled(a).toggled(b);
        set.forget(&[a]);
        assert!(!set.contains(a));
        assert!(set.contains(b));
    }
}
