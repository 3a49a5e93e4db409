//! Growable scratch buffer of node references
//!
//! Append-only, non-owning. Backs the breadth-first FIFO and the
//! name-sorted collection pass; consumed once and discarded.

use crate::catalog::CatalogNode;
use crate::error::{Error, Result};
use tracing::debug;

/// Resizable sequence of borrowed catalog nodes
///
/// Capacity starts at 1 and doubles on overflow. Growth is fallible:
/// a failed reservation surfaces as [`Error::Exhausted`] instead of
/// aborting the process.
#[derive(Debug)]
pub struct NodeBuffer<'a> {
    nodes: Vec<&'a CatalogNode>,
}

impl<'a> NodeBuffer<'a> {
    /// Create a buffer with the initial single-slot capacity
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(1),
        }
    }

    /// Append a node reference, doubling capacity when full
    pub fn push(&mut self, node: &'a CatalogNode) -> Result<()> {
        if self.nodes.len() == self.nodes.capacity() {
            let grow = self.nodes.capacity().max(1);
            self.nodes
                .try_reserve_exact(grow)
                .map_err(|e| Error::Exhausted(e.to_string()))?;
            debug!(capacity = self.nodes.capacity(), "Grew node buffer");
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Number of nodes pushed so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// O(1) random access within `[0, len)`
    pub fn get(&self, index: usize) -> Option<&'a CatalogNode> {
        self.nodes.get(index).copied()
    }

    /// Sort the collected nodes by entry name (byte lexicographic)
    ///
    /// Compares the name field itself, never node identity or layout.
    pub fn sort_by_name(&mut self) {
        self.nodes.sort_by(|a, b| a.entry.name.cmp(&b.entry.name));
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CatalogNode> + '_ {
        self.nodes.iter().copied()
    }
}

impl Default for NodeBuffer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
