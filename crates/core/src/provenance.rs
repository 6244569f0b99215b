//! Provenance record
//!
//! The ordered list of trait names a composite was built from. Names are
//! stored even when a trait was referenced by definition handle, so records
//! compare by plain string equality.

use std::collections::HashSet;
use std::fmt;

/// Ordered trait names a composite (and everything derived from it) carries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provenance(Vec<String>);

impl Provenance {
    /// The record of a value composed from nothing
    pub const EMPTY: Provenance = Provenance(Vec::new());

    /// Create an empty record
    pub fn new() -> Self {
        Provenance(Vec::new())
    }

    /// Append a trait name
    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// Trait names in composition order
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Iterate names in composition order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether `name` contributed
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Whether every name listed here is in `set`
    ///
    /// An empty record is a subset of anything.
    pub fn is_subset_of(&self, set: &HashSet<&str>) -> bool {
        self.0.iter().all(|n| set.contains(n.as_str()))
    }

    /// Whether every name in `names` is listed here
    pub fn contains_all<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> bool {
        names.into_iter().all(|n| self.contains(n))
    }

    /// Copy keeping only the first occurrence of each name
    pub fn deduplicated(&self) -> Provenance {
        let mut seen = HashSet::new();
        Provenance(
            self.0
                .iter()
                .filter(|n| seen.insert(n.as_str()))
                .cloned()
                .collect(),
        )
    }

    /// Whether some name appears more than once
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::new();
        !self.0.iter().all(|n| seen.insert(n.as_str()))
    }

    /// Number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no trait contributed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Provenance {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Provenance(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
