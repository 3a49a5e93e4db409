//! Catalog tree nodes

use crate::species::Entry;

/// One node of an ordered catalog
///
/// Owns its entry and both child subtrees; the whole tree is reclaimed
/// by ordinary drop when the owning [`Catalog`](super::Catalog) goes away.
#[derive(Debug, Clone)]
pub struct CatalogNode {
    pub entry: Entry,
    pub left: Option<Box<CatalogNode>>,
    pub right: Option<Box<CatalogNode>>,
}

impl CatalogNode {
    /// Create a new leaf holding a copy of `entry`
    pub fn new(entry: Entry) -> Self {
        Self {
            entry,
            left: None,
            right: None,
        }
    }

    /// Id this node is keyed by
    pub fn id(&self) -> u32 {
        self.entry.id
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::ElementKind;

    #[test]
    fn test_new_node_is_leaf() {
        let node = CatalogNode::new(Entry::new(7, "Voltkit", ElementKind::Electric, 35, 55, true));
        assert!(node.is_leaf());
        assert_eq!(node.id(), 7);
    }
}
