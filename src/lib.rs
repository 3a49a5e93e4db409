// BestiaryDB - A personal species catalog engine
//
// Each owner keeps an ordered catalog of species entries in a binary
// search tree; owners themselves live in a circular directory ring.

#![warn(rust_2018_idioms)]

pub mod catalog;
pub mod directory;
pub mod species;
pub mod traverse;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogNode, InsertOutcome};
pub use directory::{Owner, OwnerDirectory};
pub use species::{ElementKind, Entry, SpeciesTable};
pub use traverse::{traverse, NodeBuffer, Order, Visit};

/// BestiaryDB error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Species id {0} out of range (table holds {1} entries)")]
        SpeciesOutOfRange(u32, usize),

        #[error("Position {0} out of range (directory holds {1} owners)")]
        PositionOutOfRange(usize, usize),

        #[error("Buffer growth failed: {0}")]
        Exhausted(String),

        #[error("Render error: {0}")]
        Render(String),
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let _version: &str = VERSION;
    }

    #[test]
    fn test_error_display() {
        let err = error::Error::PositionOutOfRange(4, 2);
        assert_eq!(
            err.to_string(),
            "Position 4 out of range (directory holds 2 owners)"
        );

        let err = error::Error::SpeciesOutOfRange(0, 9);
        assert_eq!(
            err.to_string(),
            "Species id 0 out of range (table holds 9 entries)"
        );
    }
}
