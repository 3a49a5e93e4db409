//! The five traversal orders and line rendering

use super::buffer::NodeBuffer;
use crate::catalog::{Catalog, CatalogNode};
use crate::error::{Error, Result};
use crate::species::Entry;
use std::fmt::Write;
use tracing::debug;

/// Fixed notice emitted for an empty catalog, distinct from any node line
pub const EMPTY_CATALOG_NOTICE: &str = "Catalog is empty.";

/// Traversal order selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Breadth-first, left child before right
    LevelOrder,
    /// Node, left subtree, right subtree
    PreOrder,
    /// Left subtree, node, right subtree; ids strictly increasing
    InOrder,
    /// Left subtree, right subtree, node
    PostOrder,
    /// All nodes sorted by name, byte lexicographic
    NameSorted,
}

/// Outcome of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The catalog was empty; the visitor was never invoked
    Empty,
    /// The visitor ran once per node, `n` times total
    Visited(usize),
}

/// Walk `catalog` in the given order, invoking `visit` once per entry
///
/// An absent root short-circuits to [`Visit::Empty`] without touching
/// the visitor. Buffer growth failures in the level-order and
/// name-sorted paths propagate as [`Error::Exhausted`].
pub fn traverse<F>(catalog: &Catalog, order: Order, mut visit: F) -> Result<Visit>
where
    F: FnMut(&Entry),
{
    let root = match catalog.root() {
        Some(root) => root,
        None => {
            debug!(?order, "Traversal of empty catalog");
            return Ok(Visit::Empty);
        }
    };

    let mut count = 0usize;
    let mut counted = |entry: &Entry| {
        count += 1;
        visit(entry);
    };

    match order {
        Order::LevelOrder => level_order(root, &mut counted)?,
        Order::PreOrder | Order::InOrder | Order::PostOrder => {
            depth_first(root, order, &mut counted)
        }
        Order::NameSorted => name_sorted(root, &mut counted)?,
    }

    debug!(?order, visited = count, "Traversal complete");
    Ok(Visit::Visited(count))
}

/// Breadth-first walk using a NodeBuffer as FIFO
///
/// Push the root, then repeatedly visit the node at the cursor and push
/// its present children (left before right). The cursor catching up to
/// the buffer size terminates the walk.
fn level_order<'a, F>(root: &'a CatalogNode, visit: &mut F) -> Result<()>
where
    F: FnMut(&'a Entry),
{
    let mut fifo = NodeBuffer::new();
    fifo.push(root)?;

    let mut cursor = 0;
    while let Some(node) = fifo.get(cursor) {
        visit(&node.entry);
        cursor += 1;

        if let Some(left) = node.left.as_deref() {
            fifo.push(left)?;
        }
        if let Some(right) = node.right.as_deref() {
            fifo.push(right)?;
        }
    }
    Ok(())
}

/// One recursive walker for all three depth-first orders
///
/// The orders differ only in where the visit lands relative to the two
/// child recursions.
fn depth_first<'a, F>(node: &'a CatalogNode, order: Order, visit: &mut F)
where
    F: FnMut(&'a Entry),
{
    if order == Order::PreOrder {
        visit(&node.entry);
    }
    if let Some(left) = node.left.as_deref() {
        depth_first(left, order, visit);
    }
    if order == Order::InOrder {
        visit(&node.entry);
    }
    if let Some(right) = node.right.as_deref() {
        depth_first(right, order, visit);
    }
    if order == Order::PostOrder {
        visit(&node.entry);
    }
}

/// Collect every node, sort by name, then visit in sorted order
fn name_sorted<'a, F>(root: &'a CatalogNode, visit: &mut F) -> Result<()>
where
    F: FnMut(&'a Entry),
{
    let mut all = NodeBuffer::new();
    collect(root, &mut all)?;
    all.sort_by_name();
    for node in all.iter() {
        visit(&node.entry);
    }
    Ok(())
}

fn collect<'a>(node: &'a CatalogNode, buf: &mut NodeBuffer<'a>) -> Result<()> {
    if let Some(left) = node.left.as_deref() {
        collect(left, buf)?;
    }
    if let Some(right) = node.right.as_deref() {
        collect(right, buf)?;
    }
    buf.push(node)
}

/// Render the catalog to `out`, one line per visited entry
///
/// Writes the fixed [`EMPTY_CATALOG_NOTICE`] line when the catalog is
/// empty; otherwise each entry renders via its `Display` impl.
pub fn render<W: Write>(catalog: &Catalog, order: Order, out: &mut W) -> Result<Visit> {
    let mut write_err = None;
    let visit = traverse(catalog, order, |entry| {
        if write_err.is_none() {
            write_err = writeln!(out, "{entry}").err();
        }
    })?;

    if let Some(e) = write_err {
        return Err(Error::Render(e.to_string()));
    }
    if visit == Visit::Empty {
        writeln!(out, "{EMPTY_CATALOG_NOTICE}").map_err(|e| Error::Render(e.to_string()))?;
    }
    Ok(visit)
}
