//! The set of depth-1 category names, in first-seen order.

use serde::{Deserialize, Serialize};

/// Distinct category names. Insertion order is preserved and duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Create a new, empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Whether every name in `other` is also in this set.
    pub fn covers(&self, other: &CategorySet) -> bool {
        other.iter().all(|n| self.contains(n))
    }

    /// Keep only the names also present in `other`.
    pub fn intersection(&self, other: &CategorySet) -> CategorySet {
        self.iter().filter(|n| other.contains(n)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CategorySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = CategorySet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}
