//! Species value types and the read-only reference table
//!
//! An [`Entry`] is one species record: numeric id, name, element kind
//! and combat stats. Entries are always deep-copied out of a
//! [`SpeciesTable`] when they enter a catalog, so catalog lifetime is
//! independent of the table that seeded it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element kind of a species
///
/// Carries a fixed uppercase label for display. Unrecognized numeric
/// codes decode to `Unknown` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Grass,
    Fire,
    Water,
    Bug,
    Normal,
    Poison,
    Electric,
    Ground,
    Fairy,
    Fighting,
    Psychic,
    Rock,
    Ghost,
    Dragon,
    Ice,
    Unknown,
}

impl ElementKind {
    /// Fixed textual label for this kind
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Grass => "GRASS",
            ElementKind::Fire => "FIRE",
            ElementKind::Water => "WATER",
            ElementKind::Bug => "BUG",
            ElementKind::Normal => "NORMAL",
            ElementKind::Poison => "POISON",
            ElementKind::Electric => "ELECTRIC",
            ElementKind::Ground => "GROUND",
            ElementKind::Fairy => "FAIRY",
            ElementKind::Fighting => "FIGHTING",
            ElementKind::Psychic => "PSYCHIC",
            ElementKind::Rock => "ROCK",
            ElementKind::Ghost => "GHOST",
            ElementKind::Dragon => "DRAGON",
            ElementKind::Ice => "ICE",
            ElementKind::Unknown => "UNKNOWN",
        }
    }

    /// Decode a raw category code; out-of-range codes map to `Unknown`
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => ElementKind::Grass,
            1 => ElementKind::Fire,
            2 => ElementKind::Water,
            3 => ElementKind::Bug,
            4 => ElementKind::Normal,
            5 => ElementKind::Poison,
            6 => ElementKind::Electric,
            7 => ElementKind::Ground,
            8 => ElementKind::Fairy,
            9 => ElementKind::Fighting,
            10 => ElementKind::Psychic,
            11 => ElementKind::Rock,
            12 => ElementKind::Ghost,
            13 => ElementKind::Dragon,
            14 => ElementKind::Ice,
            _ => ElementKind::Unknown,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One species record
///
/// Immutable value; cloned (never shared) out of the reference table
/// when inserted into a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique positive id (catalog sort key)
    pub id: u32,
    pub name: String,
    pub kind: ElementKind,
    pub hp: u32,
    pub attack: u32,
    pub can_evolve: bool,
}

impl Entry {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        kind: ElementKind,
        hp: u32,
        attack: u32,
        can_evolve: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            hp,
            attack,
            can_evolve,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Type: {}, HP: {}, Attack: {}, Can Evolve: {}",
            self.id,
            self.name,
            self.kind.label(),
            self.hp,
            self.attack,
            if self.can_evolve { "Yes" } else { "No" }
        )
    }
}

/// Read-only species reference table
///
/// An ordered, fixed sequence of entries stored 0-indexed but addressed
/// by 1-based species id. Lookups are bound-checked: an id outside
/// `[1, len]` is a recoverable error, never an out-of-bounds access.
#[derive(Debug, Clone)]
pub struct SpeciesTable {
    rows: Vec<Entry>,
}

impl SpeciesTable {
    pub fn new(rows: Vec<Entry>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by 1-based species id
    pub fn get(&self, id: u32) -> Result<&Entry> {
        if id == 0 || id as usize > self.rows.len() {
            return Err(Error::SpeciesOutOfRange(id, self.rows.len()));
        }
        Ok(&self.rows[id as usize - 1])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> SpeciesTable {
        SpeciesTable::new(vec![
            Entry::new(1, "Sproutling", ElementKind::Grass, 45, 49, true),
            Entry::new(2, "Embercub", ElementKind::Fire, 39, 52, true),
            Entry::new(3, "Tidepup", ElementKind::Water, 44, 48, true),
        ])
    }

    #[test]
    fn test_table_lookup_is_one_based() {
        let table = sample_table();
        assert_eq!(table.get(1).unwrap().name, "Sproutling");
        assert_eq!(table.get(3).unwrap().name, "Tidepup");
    }

    #[test]
    fn test_table_bounds_are_checked() {
        let table = sample_table();
        assert!(matches!(
            table.get(0),
            Err(Error::SpeciesOutOfRange(0, 3))
        ));
        assert!(matches!(
            table.get(4),
            Err(Error::SpeciesOutOfRange(4, 3))
        ));
    }

    #[test]
    fn test_kind_labels_and_fallback() {
        assert_eq!(ElementKind::Electric.label(), "ELECTRIC");
        assert_eq!(ElementKind::from_code(2), ElementKind::Water);
        assert_eq!(ElementKind::from_code(200), ElementKind::Unknown);
        assert_eq!(ElementKind::from_code(200).label(), "UNKNOWN");
    }

    #[test]
    fn test_entry_display_line() {
        let entry = Entry::new(1, "Sproutling", ElementKind::Grass, 45, 49, true);
        assert_eq!(
            entry.to_string(),
            "ID: 1, Name: Sproutling, Type: GRASS, HP: 45, Attack: 49, Can Evolve: Yes"
        );

        let entry = Entry::new(9, "Stonehide", ElementKind::Rock, 80, 95, false);
        assert!(entry.to_string().ends_with("Can Evolve: No"));
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = Entry::new(6, "Drakeling", ElementKind::Dragon, 41, 64, true);
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
