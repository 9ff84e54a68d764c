//! Loaded catalog plus the lookup sets derived from it
//!
//! A `CatalogState` is built once per successful load and never mutated
//! afterwards. Reloading builds a new state with a higher generation, so
//! a `ModId` handed out earlier cannot silently point at a different mod.

use super::model::Mod;
use std::collections::BTreeSet;
use std::fmt;

/// Stable handle to a mod within one catalog generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModId {
    generation: u64,
    index: usize,
}

impl ModId {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ModId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.generation, self.index)
    }
}

/// Result of resolving a user-supplied mod name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModLookup {
    Found(ModId),
    NotFound,
    /// Names of every candidate that matched
    Ambiguous(Vec<String>),
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    generation: u64,
    mods: Vec<Mod>,
    versions: BTreeSet<String>,
    loaders: BTreeSet<String>,
    authors: BTreeSet<String>,
}

impl CatalogState {
    /// Empty catalog, e.g. after a failed load
    pub fn empty(generation: u64) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }

    /// Builds the state and its derived sets from scratch
    pub fn new(generation: u64, mods: Vec<Mod>) -> Self {
        let mut versions = BTreeSet::new();
        let mut loaders = BTreeSet::new();
        let mut authors = BTreeSet::new();

        for entry in mods.iter().flat_map(|m| m.versions.iter()) {
            versions.insert(entry.version.clone());
            loaders.insert(entry.loader.clone());
            authors.insert(entry.author.clone());
        }

        Self {
            generation,
            mods,
            versions,
            loaders,
            authors,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    pub fn mods(&self) -> &[Mod] {
        &self.mods
    }

    /// Mods paired with their handles, in catalog order
    pub fn entries(&self) -> impl Iterator<Item = (ModId, &Mod)> {
        let generation = self.generation;
        self.mods
            .iter()
            .enumerate()
            .map(move |(index, m)| (ModId { generation, index }, m))
    }

    /// `None` for handles from another generation or out of range
    pub fn get(&self, id: ModId) -> Option<&Mod> {
        if id.generation != self.generation {
            return None;
        }
        self.mods.get(id.index)
    }

    /// Sorted distinct version strings across the catalog
    pub fn versions(&self) -> &BTreeSet<String> {
        &self.versions
    }

    pub fn loaders(&self) -> &BTreeSet<String> {
        &self.loaders
    }

    pub fn authors(&self) -> &BTreeSet<String> {
        &self.authors
    }

    /// Exact case-insensitive name first, then a unique substring match
    pub fn find_by_name(&self, query: &str) -> ModLookup {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return ModLookup::NotFound;
        }

        let exact: Vec<(ModId, &Mod)> = self
            .entries()
            .filter(|(_, m)| m.name.to_lowercase() == needle)
            .collect();
        if let [(id, _)] = exact.as_slice() {
            return ModLookup::Found(*id);
        }
        if exact.len() > 1 {
            return ModLookup::Ambiguous(exact.iter().map(|(_, m)| m.name.clone()).collect());
        }

        let partial: Vec<(ModId, &Mod)> = self
            .entries()
            .filter(|(_, m)| m.name.to_lowercase().contains(&needle))
            .collect();
        match partial.as_slice() {
            [] => ModLookup::NotFound,
            [(id, _)] => ModLookup::Found(*id),
            many => ModLookup::Ambiguous(many.iter().map(|(_, m)| m.name.clone()).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("state.test.rs");
}
