//! Ordered entry container keyed by a signed insertion key.
//!
//! Behaves like a doubly-ended list: appends take increasing keys, prepends
//! take decreasing keys, and arbitrary-position inserts write a specific key.
//! Iteration follows raw insertion order; [`Container::sorted`] gives key
//! order for passes that need it.

use super::ScriptEntry;

#[derive(Debug, Clone, Default)]
pub struct Container {
    items: Vec<(i64, ScriptEntry)>,
    next_key: i64,
    min_key: i64,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert after all existing entries.
    pub fn append(&mut self, entry: ScriptEntry) {
        let key = self.next_key;
        self.next_key += 1;
        self.items.push((key, entry));
    }

    /// Insert before all existing entries.
    pub fn prepend(&mut self, entry: ScriptEntry) {
        self.min_key -= 1;
        self.items.insert(0, (self.min_key, entry));
    }

    /// Replace the whole container with a single entry.
    pub fn set(&mut self, entry: ScriptEntry) {
        self.clear();
        self.append(entry);
    }

    /// Insert at an explicit key. An existing entry under the same key is
    /// replaced in place; a new key lands at the tail until the next sorted
    /// pass puts it where the key says.
    pub fn insert_at(&mut self, key: i64, entry: ScriptEntry) {
        if let Some(slot) = self.items.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = entry;
            return;
        }
        self.items.push((key, entry));
        self.next_key = self.next_key.max(key + 1);
        self.min_key = self.min_key.min(key);
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.next_key = 0;
        self.min_key = 0;
    }

    /// Entries with their keys, in insertion order.
    pub fn iter_keyed(&self) -> impl Iterator<Item = (i64, &ScriptEntry)> {
        self.items.iter().map(|(k, e)| (*k, e))
    }

    /// Entries in key order (stable for equal keys), without mutating the
    /// container.
    pub fn sorted(&self) -> Vec<(i64, &ScriptEntry)> {
        let mut entries: Vec<_> = self.iter_keyed().collect();
        entries.sort_by_key(|(k, _)| *k);
        entries
    }
}
