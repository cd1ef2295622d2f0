//! Depth-first folder lookup and detachment.
//!
//! # Invariants
//! - Traversal is pre-order over roots, then children in insertion order.
//! - Folder ids are unique, so the first match is the only match.

use crate::model::folder::{Folder, FolderId};

/// Finds one folder by id.
pub fn find(folders: &[Folder], id: FolderId) -> Option<&Folder> {
    for folder in folders {
        if folder.id == id {
            return Some(folder);
        }
        if let Some(found) = find(&folder.children, id) {
            return Some(found);
        }
    }
    None
}

/// Finds one folder by id for in-place mutation.
pub fn find_mut(folders: &mut [Folder], id: FolderId) -> Option<&mut Folder> {
    for folder in folders.iter_mut() {
        if folder.id == id {
            return Some(folder);
        }
        if let Some(found) = find_mut(&mut folder.children, id) {
            return Some(found);
        }
    }
    None
}

/// Removes the folder with `id` from its parent (or the root sequence) and
/// returns the subtree intact.
///
/// Returns `None` and leaves the forest untouched when `id` is absent.
pub fn detach(folders: &mut Vec<Folder>, id: FolderId) -> Option<Folder> {
    for index in 0..folders.len() {
        if folders[index].id == id {
            return Some(folders.remove(index));
        }
        if let Some(found) = detach(&mut folders[index].children, id) {
            return Some(found);
        }
    }
    None
}

/// Returns the folders sharing `parent_id`.
///
/// `None` selects the root scope. Returns `None` when the parent is absent.
pub fn sibling_scope(folders: &[Folder], parent_id: Option<FolderId>) -> Option<&[Folder]> {
    match parent_id {
        None => Some(folders),
        Some(parent_id) => find(folders, parent_id).map(|parent| parent.children.as_slice()),
    }
}

/// Returns whether `id` is `root` itself or one of its descendants.
pub fn subtree_contains(root: &Folder, id: FolderId) -> bool {
    root.id == id || find(&root.children, id).is_some()
}

#[cfg(test)]
mod tests {
    use super::{detach, find, find_mut, sibling_scope, subtree_contains};
    use crate::model::folder::Folder;
    use uuid::Uuid;

    fn sample() -> (Vec<Folder>, Uuid, Uuid, Uuid) {
        let leaf = Folder::new("Leaf");
        let leaf_id = leaf.id;
        let mid = Folder::new("Mid").with_child(leaf);
        let mid_id = mid.id;
        let top = Folder::new("Top").with_child(mid).with_child(Folder::new("Side"));
        let top_id = top.id;
        (vec![top, Folder::new("Other")], top_id, mid_id, leaf_id)
    }

    #[test]
    fn find_reaches_nested_folder() {
        let (roots, _, _, leaf_id) = sample();
        let found = find(&roots, leaf_id).expect("leaf should be found");
        assert_eq!(found.name, "Leaf");
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let (roots, ..) = sample();
        assert!(find(&roots, Uuid::new_v4()).is_none());
    }

    #[test]
    fn find_mut_allows_in_place_rename() {
        let (mut roots, _, mid_id, _) = sample();
        find_mut(&mut roots, mid_id).expect("mid should be found").name = "Renamed".to_string();
        assert_eq!(find(&roots, mid_id).map(|f| f.name.as_str()), Some("Renamed"));
    }

    #[test]
    fn detach_removes_subtree_and_keeps_contents() {
        let (mut roots, top_id, mid_id, leaf_id) = sample();
        let detached = detach(&mut roots, mid_id).expect("mid should detach");

        assert_eq!(detached.children.len(), 1);
        assert_eq!(detached.children[0].id, leaf_id);
        assert!(find(&roots, mid_id).is_none());
        assert!(find(&roots, leaf_id).is_none());
        let top = find(&roots, top_id).expect("top should remain");
        assert_eq!(top.children.len(), 1);
        assert_eq!(top.children[0].name, "Side");
    }

    #[test]
    fn detach_root_shrinks_root_sequence() {
        let (mut roots, top_id, ..) = sample();
        detach(&mut roots, top_id).expect("top should detach");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name, "Other");
    }

    #[test]
    fn detach_unknown_id_is_noop() {
        let (mut roots, ..) = sample();
        let before = roots.clone();
        assert!(detach(&mut roots, Uuid::new_v4()).is_none());
        assert_eq!(roots, before);
    }

    #[test]
    fn sibling_scope_resolves_root_and_nested_levels() {
        let (roots, top_id, ..) = sample();
        assert_eq!(sibling_scope(&roots, None).map(<[Folder]>::len), Some(2));
        assert_eq!(sibling_scope(&roots, Some(top_id)).map(<[Folder]>::len), Some(2));
        assert!(sibling_scope(&roots, Some(Uuid::new_v4())).is_none());
    }

    #[test]
    fn find_and_detach_handle_deep_chain() {
        let mut ids = Vec::new();
        let mut chain = Folder::new("Level 0");
        ids.push(chain.id);
        for level in 1..200 {
            chain = Folder::new(format!("Level {level}")).with_child(chain);
            ids.push(chain.id);
        }
        let deepest = ids[0];
        let mut roots = vec![chain];

        assert_eq!(find(&roots, deepest).map(|f| f.name.as_str()), Some("Level 0"));
        let detached = detach(&mut roots, ids[1]).expect("second-deepest should detach");
        assert_eq!(detached.children[0].id, deepest);
        assert!(find(&roots, deepest).is_none());
        assert!(find(&roots, ids[2]).is_some_and(|f| f.children.is_empty()));
    }

    #[test]
    fn subtree_contains_checks_descendants() {
        let (roots, top_id, _, leaf_id) = sample();
        let top = find(&roots, top_id).expect("top should be found");
        assert!(subtree_contains(top, top_id));
        assert!(subtree_contains(top, leaf_id));
        assert!(!subtree_contains(top, roots[1].id));
    }
}
