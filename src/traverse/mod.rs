//! Traversal engine
//!
//! Stateless walks over a [`Catalog`](crate::Catalog) that invoke a
//! visitor once per node, in one of five selectable orders:
//!
//! ```text
//! Order
//!   ├─→ LevelOrder  — breadth-first via NodeBuffer FIFO
//!   ├─→ PreOrder    — node, left, right
//!   ├─→ InOrder     — left, node, right (strictly increasing ids)
//!   ├─→ PostOrder   — left, right, node
//!   └─→ NameSorted  — collect all, sort by name, visit in order
//! ```
//!
//! An empty catalog never reaches the visitor: every order reports
//! [`Visit::Empty`] instead.

pub mod buffer;
pub mod engine;

pub use buffer::NodeBuffer;
pub use engine::{render, traverse, Order, Visit, EMPTY_CATALOG_NOTICE};
