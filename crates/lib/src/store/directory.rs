//! Fingerprint → key directory.

use indexmap::IndexMap;

use crate::encoding::Fingerprint;
use crate::key::Key;

/// Maps each stored fingerprint to the key it was first inserted with.
///
/// Re-inserting a fingerprint keeps the first key and its position.
#[derive(Debug, Clone, Default)]
pub struct KeyDirectory {
    keys: IndexMap<Fingerprint, Key>,
}

impl KeyDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: IndexMap::with_capacity(capacity),
        }
    }

    /// Record `key` under `fingerprint` unless it is already present.
    ///
    /// Returns true if the fingerprint was new.
    pub fn insert(&mut self, fingerprint: Fingerprint, key: impl FnOnce() -> Key) -> bool {
        match self.keys.entry(fingerprint) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(key());
                true
            }
        }
    }

    /// Remove a fingerprint, shifting later keys down.
    pub fn remove(&mut self, fingerprint: &Fingerprint) -> Option<Key> {
        self.keys.shift_remove(fingerprint)
    }

    /// Get the key stored for a fingerprint.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&Key> {
        self.keys.get(fingerprint)
    }

    /// Check whether a fingerprint is present.
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.keys.contains_key(fingerprint)
    }

    /// Position of a fingerprint in insertion order.
    pub fn position(&self, fingerprint: &Fingerprint) -> Option<usize> {
        self.keys.get_index_of(fingerprint)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over (fingerprint, key) pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Fingerprint, Key> {
        self.keys.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Values<'_, Fingerprint, Key> {
        self.keys.values()
    }

    /// Iterate over fingerprints in insertion order.
    pub fn fingerprints(&self) -> indexmap::map::Keys<'_, Fingerprint, Key> {
        self.keys.keys()
    }

    pub(crate) fn into_keys(self) -> indexmap::map::IntoValues<Fingerprint, Key> {
        self.keys.into_values()
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
