//! Ordered catalog: insert and search over the id-keyed tree

use super::node::CatalogNode;
use crate::species::Entry;
use std::cmp::Ordering;
use tracing::debug;

/// Result of a catalog insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new leaf was attached
    Inserted,
    /// The id was already present; the tree is unchanged
    Duplicate,
}

/// An owner's ordered catalog of species entries
///
/// Binary search tree keyed by `Entry::id`. Invariant: for every node,
/// all ids in the left subtree are smaller and all ids in the right
/// subtree are larger; ids are unique across the whole tree.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    root: Option<Box<CatalogNode>>,
    len: usize,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with a single starter entry
    pub fn with_starter(starter: &Entry) -> Self {
        let mut catalog = Self::new();
        catalog.insert(starter);
        catalog
    }

    /// Insert a copy of `entry`, keyed by its id
    ///
    /// Recursive descent: smaller ids go left, larger go right. If the
    /// id is already present the tree is left exactly as it was and the
    /// outcome is [`InsertOutcome::Duplicate`]; the existing node and
    /// its children are never detached.
    pub fn insert(&mut self, entry: &Entry) -> InsertOutcome {
        let outcome = insert_at(&mut self.root, entry);
        match outcome {
            InsertOutcome::Inserted => {
                self.len += 1;
                debug!(id = entry.id, name = %entry.name, "Inserted catalog entry");
            }
            InsertOutcome::Duplicate => {
                debug!(id = entry.id, "Duplicate id, catalog unchanged");
            }
        }
        outcome
    }

    /// Find the entry with the given id
    ///
    /// O(depth): average O(log n), worst O(n) on a degenerate chain.
    pub fn search(&self, id: u32) -> Option<&Entry> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match id.cmp(&node.entry.id) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.entry),
            };
        }
        None
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&CatalogNode> {
        self.root.as_deref()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree (0 for an empty catalog)
    pub fn depth(&self) -> usize {
        fn depth_of(node: Option<&CatalogNode>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + depth_of(n.left.as_deref()).max(depth_of(n.right.as_deref())),
            }
        }
        depth_of(self.root.as_deref())
    }
}

fn insert_at(slot: &mut Option<Box<CatalogNode>>, entry: &Entry) -> InsertOutcome {
    match slot {
        None => {
            *slot = Some(Box::new(CatalogNode::new(entry.clone())));
            InsertOutcome::Inserted
        }
        Some(node) => match entry.id.cmp(&node.entry.id) {
            Ordering::Less => insert_at(&mut node.left, entry),
            Ordering::Greater => insert_at(&mut node.right, entry),
            Ordering::Equal => InsertOutcome::Duplicate,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::ElementKind;

    fn entry(id: u32, name: &str) -> Entry {
        Entry::new(id, name, ElementKind::Normal, 40, 45, false)
    }

    fn catalog_from(ids: &[u32]) -> Catalog {
        let mut catalog = Catalog::new();
        for &id in ids {
            catalog.insert(&entry(id, &format!("species-{id}")));
        }
        catalog
    }

    /// Every node's left ids are smaller and right ids larger
    fn check_bst(node: Option<&CatalogNode>, lo: Option<u32>, hi: Option<u32>) -> bool {
        match node {
            None => true,
            Some(n) => {
                let id = n.entry.id;
                lo.map_or(true, |lo| id > lo)
                    && hi.map_or(true, |hi| id < hi)
                    && check_bst(n.left.as_deref(), lo, Some(id))
                    && check_bst(n.right.as_deref(), Some(id), hi)
            }
        }
    }

    #[test]
    fn test_insert_preserves_bst_invariant() {
        let catalog = catalog_from(&[5, 3, 8, 1, 4, 9, 2, 7, 6]);
        assert!(check_bst(catalog.root(), None, None));
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_duplicate_insert_is_a_no_op() {
        let mut catalog = catalog_from(&[5, 3, 8, 1, 4]);
        let before = catalog.clone();

        assert_eq!(catalog.insert(&entry(3, "again")), InsertOutcome::Duplicate);

        assert_eq!(catalog.len(), before.len());
        // Node 3 keeps both children; the duplicate never orphans a subtree.
        let root = catalog.root().unwrap();
        let three = root.left.as_deref().unwrap();
        assert_eq!(three.id(), 3);
        assert_eq!(three.left.as_deref().unwrap().id(), 1);
        assert_eq!(three.right.as_deref().unwrap().id(), 4);
    }

    #[test]
    fn test_search_after_insert() {
        let catalog = catalog_from(&[10, 5, 15]);
        assert_eq!(catalog.search(5).unwrap().id, 5);
        assert_eq!(catalog.search(15).unwrap().name, "species-15");
        assert!(catalog.search(7).is_none());
        assert!(Catalog::new().search(1).is_none());
    }

    #[test]
    fn test_depth_tracks_insertion_order() {
        // Sorted inserts degenerate into a chain.
        assert_eq!(catalog_from(&[1, 2, 3, 4]).depth(), 4);
        assert_eq!(catalog_from(&[2, 1, 3]).depth(), 2);
        assert_eq!(Catalog::new().depth(), 0);
    }

    #[test]
    fn test_with_starter_seeds_one_node() {
        let catalog = Catalog::with_starter(&entry(4, "Embercub"));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.root().unwrap().is_leaf());
    }
}
