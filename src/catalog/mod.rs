//! Ordered catalog
//!
//! Each owner's species live in an unbalanced binary search tree keyed
//! by entry id. No rebalancing: depth is insertion-order dependent,
//! worst case O(n) on a sorted insert sequence.
//!
//! ```text
//! Catalog (root, len)
//!   └─→ CatalogNode { entry, left, right }
//!         ├─→ left:  all ids < entry.id
//!         └─→ right: all ids > entry.id
//! ```
//!
//! Duplicate ids are rejected structurally: inserting an id that is
//! already present leaves the tree untouched and reports
//! [`InsertOutcome::Duplicate`].

pub mod node;
pub mod tree;

pub use node::CatalogNode;
pub use tree::{Catalog, InsertOutcome};
