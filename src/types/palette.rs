//! Shared colour palette accumulated across all sprites.
//!
//! Colours receive indices in the order they are first encountered. Entries
//! live in a `Vec` whose position is the index, so iterating the palette
//! always yields index order no matter how lookups are stored.

use std::collections::{BTreeSet, HashMap};

use super::Colour;

/// A single palette colour and its usage statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// The colour itself.
    pub colour: Colour,
    /// Number of pixels using this colour across all files.
    pub count: usize,
    /// Distinct files the colour appears in.
    pub files: BTreeSet<String>,
}

impl PaletteEntry {
    fn new(colour: Colour, file: &str) -> Self {
        Self {
            colour,
            count: 1,
            files: BTreeSet::from([file.to_string()]),
        }
    }
}

/// Insertion-ordered palette builder.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    lookup: HashMap<Colour, usize>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the index of a colour, registering it if unseen.
    ///
    /// New colours take the next sequential index starting at 0. Every call
    /// counts one occurrence and records `file` in the colour's file set.
    /// Callers must not pass [`Colour::TRANSPARENT`].
    pub fn index_of(&mut self, colour: Colour, file: &str) -> usize {
        if let Some(&index) = self.lookup.get(&colour) {
            let entry = &mut self.entries[index];
            entry.count += 1;
            if !entry.files.contains(file) {
                entry.files.insert(file.to_string());
            }
            return index;
        }

        let index = self.entries.len();
        self.entries.push(PaletteEntry::new(colour, file));
        self.lookup.insert(colour, index);
        index
    }

    /// Number of distinct colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no colours were registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }
}
