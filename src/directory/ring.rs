//! Circular owner ring over an index-linked arena

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::species::Entry;
use tracing::{debug, info};

/// Fixed notice for listing an empty directory
pub const NO_OWNERS_NOTICE: &str = "No owners found.";

/// One owner: a name and its catalog, linked into the directory ring
///
/// `next`/`prev` are arena indices. A directory of size 1 holds the
/// degenerate ring explicitly: the sole owner's links point to itself.
#[derive(Debug)]
pub struct Owner {
    name: String,
    catalog: Catalog,
    next: usize,
    prev: usize,
}

impl Owner {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }
}

/// Circular doubly-linked directory of owners
///
/// Ring invariant: starting from any owner, following `next` exactly
/// `len` times visits every owner once and returns to the start
/// (symmetrically for `prev`).
#[derive(Debug, Default)]
pub struct OwnerDirectory {
    owners: Vec<Owner>,
    head: Option<usize>,
}

impl OwnerDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of owners in the ring
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Create an owner seeded with one copy of `starter`, splicing it
    /// just before the head
    ///
    /// Returns the new owner's 1-based ring position. State machine:
    /// empty directory → self-linked head; one owner → mutual 2-ring;
    /// otherwise splice between the current tail (`head.prev`) and head.
    pub fn create_owner(&mut self, name: impl Into<String>, starter: &Entry) -> usize {
        let name = name.into();
        let idx = self.owners.len();

        let (next, prev) = match self.head {
            // Degenerate ring: the sole owner points at itself.
            None => (idx, idx),
            Some(head) => {
                let tail = self.owners[head].prev;
                (head, tail)
            }
        };

        self.owners.push(Owner {
            name,
            catalog: Catalog::with_starter(starter),
            next,
            prev,
        });

        match self.head {
            None => self.head = Some(idx),
            Some(head) => {
                let tail = self.owners[head].prev;
                self.owners[tail].next = idx;
                self.owners[head].prev = idx;
            }
        }

        info!(
            owner = %self.owners[idx].name,
            starter = starter.id,
            position = idx + 1,
            "Created owner"
        );
        idx + 1
    }

    /// Names in ring order
    ///
    /// Walks forward from the head exactly `len` steps; never "until
    /// head again", which would loop forever on the self-linked ring.
    pub fn list_owners(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.owners.len());
        if let Some(head) = self.head {
            let mut cursor = head;
            for _ in 0..self.owners.len() {
                names.push(self.owners[cursor].name.as_str());
                cursor = self.owners[cursor].next;
            }
        }
        names
    }

    /// Look up an owner by 1-based ring position
    ///
    /// Bound-checked before walking: positions outside `[1, len]` are a
    /// recoverable error, never an unbounded walk.
    pub fn find_by_position(&self, position: usize) -> Result<&Owner> {
        let idx = self.index_for(position)?;
        Ok(&self.owners[idx])
    }

    /// Mutable variant of [`find_by_position`](Self::find_by_position)
    pub fn owner_mut(&mut self, position: usize) -> Result<&mut Owner> {
        let idx = self.index_for(position)?;
        Ok(&mut self.owners[idx])
    }

    /// Walk `steps` forward from the head, returning the owner reached
    ///
    /// `walk_forward(0)` is the head itself. Errors on an empty
    /// directory.
    pub fn walk_forward(&self, steps: usize) -> Result<&Owner> {
        let head = self
            .head
            .ok_or(Error::PositionOutOfRange(1, 0))?;
        let mut cursor = head;
        for _ in 0..steps {
            cursor = self.owners[cursor].next;
        }
        Ok(&self.owners[cursor])
    }

    /// Walk `steps` backward from the head along `prev` links
    pub fn walk_backward(&self, steps: usize) -> Result<&Owner> {
        let head = self
            .head
            .ok_or(Error::PositionOutOfRange(1, 0))?;
        let mut cursor = head;
        for _ in 0..steps {
            cursor = self.owners[cursor].prev;
        }
        Ok(&self.owners[cursor])
    }

    fn index_for(&self, position: usize) -> Result<usize> {
        let size = self.owners.len();
        let head = match self.head {
            Some(head) if position >= 1 && position <= size => head,
            _ => {
                debug!(position, size, "Directory position out of range");
                return Err(Error::PositionOutOfRange(position, size));
            }
        };

        let mut cursor = head;
        for _ in 1..position {
            cursor = self.owners[cursor].next;
        }
        Ok(cursor)
    }
}
