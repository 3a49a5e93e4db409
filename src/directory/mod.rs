//! Owner directory
//!
//! Circular doubly-linked directory of owners. The ring is an
//! index-linked arena rather than raw mutually-referencing links, so
//! "circular" is a property the structure enforces:
//!
//! ```text
//! OwnerDirectory { owners: Vec<Owner>, head }
//!   owners[0] ⇄ owners[1] ⇄ owners[2] ⇄ owners[0] ...
//! ```
//!
//! Insertion order equals ring order: each new owner is spliced just
//! before the head (appended at the tail).

pub mod ring;

pub use ring::{Owner, OwnerDirectory, NO_OWNERS_NOTICE};
