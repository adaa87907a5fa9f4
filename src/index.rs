//! Identifier indexes queried by the pairing logic.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Membership view over every identifier known to a catalog.
pub trait IdIndex {
    fn contains_id(&self, id: &str) -> bool;

    /// All identifiers, in the index's own iteration order.
    fn ids(&self) -> impl Iterator<Item = &str>;
}

impl IdIndex for HashSet<String> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }

    fn ids(&self) -> impl Iterator<Item = &str> {
        self.iter().map(String::as_str)
    }
}

impl IdIndex for BTreeSet<String> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }

    fn ids(&self) -> impl Iterator<Item = &str> {
        self.iter().map(String::as_str)
    }
}

impl<V> IdIndex for HashMap<String, V> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains_key(id)
    }

    fn ids(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl<V> IdIndex for BTreeMap<String, V> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains_key(id)
    }

    fn ids(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}
