use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::Catalog;

/// How many of each ingredient the user has picked.
///
/// Keys are ingredient names. Any string is accepted: names that are not in
/// the catalog are stored but ignored by every derivation.
/// A name with no entry has a count of zero, and counts never go negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantityMap {
    counts: BTreeMap<String, u32>,
}

impl QuantityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, name: &str) {
        let count = self.counts.entry(name.to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Removes one of `name`. A no-op when the count is already zero.
    pub fn decrement(&mut self, name: &str) {
        if let Some(count) = self.counts.get_mut(name) {
            *count = count.saturating_sub(1);
        }
    }

    /// Entries in name order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|count| *count == 0)
    }

    /// Sum of counts over names the catalog knows about.
    pub fn total_count_known(&self, catalog: &Catalog<'_>) -> u64 {
        self.iter()
            .filter(|(name, _)| catalog.lookup(name).is_some())
            .map(|(_, count)| u64::from(count))
            .sum()
    }
}
