//! Species and ecoregion registries the parser resolves names against.
//!
//! The host simulation owns both registries; the parser only needs a count
//! and a by-name lookup, which is the [`Lookup`] capability. [`Registry`] is
//! a plain in-memory implementation for hosts that keep a name list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ecoregion {
    pub name: String,
    pub index: usize,
}

/// Read-only lookup over a dense, 0-based collection of named entities.
pub trait Lookup<T> {
    /// Number of entities; sizes the per-entity arrays in the output.
    fn count(&self) -> usize;

    /// Exact-match lookup by name.
    fn by_name(&self, name: &str) -> Option<&T>;
}

/// An entity that can be built from its dense index and name.
pub trait Named {
    fn from_parts(index: usize, name: String) -> Self;
    fn name(&self) -> &str;
}

impl Named for Species {
    fn from_parts(index: usize, name: String) -> Self {
        Species { name, index }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Ecoregion {
    fn from_parts(index: usize, name: String) -> Self {
        Ecoregion { name, index }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
    by_name: HashMap<String, usize>,
}

impl<T: Named> Registry<T> {
    /// Build a registry whose indices follow the order of `names`.
    /// A repeated name keeps its first index.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        let mut by_name = HashMap::new();
        for name in names {
            let name = name.into();
            if by_name.contains_key(&name) {
                continue;
            }
            let index = entries.len();
            by_name.insert(name.clone(), index);
            entries.push(T::from_parts(index, name));
        }
        Registry { entries, by_name }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T> Lookup<T> for Registry<T> {
    fn count(&self) -> usize {
        self.entries.len()
    }

    fn by_name(&self, name: &str) -> Option<&T> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }
}
