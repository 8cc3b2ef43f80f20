//! Fingerprint → value store.

use indexmap::IndexMap;

use crate::encoding::Fingerprint;

/// Ordered mapping from fingerprint to value.
///
/// Overwriting an existing fingerprint replaces the value in place and keeps
/// its position.
#[derive(Debug, Clone)]
pub struct BackingStore<V> {
    values: IndexMap<Fingerprint, V>,
}

impl<V> BackingStore<V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Create an empty store with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite a value, returning the previous one.
    pub fn insert(&mut self, fingerprint: Fingerprint, value: V) -> Option<V> {
        self.values.insert(fingerprint, value)
    }

    /// Get the value for a fingerprint.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&V> {
        self.values.get(fingerprint)
    }

    /// Get a mutable reference to the value for a fingerprint.
    pub fn get_mut(&mut self, fingerprint: &Fingerprint) -> Option<&mut V> {
        self.values.get_mut(fingerprint)
    }

    /// Check whether a fingerprint is present.
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.values.contains_key(fingerprint)
    }

    /// Remove a fingerprint, shifting later values down.
    pub fn remove(&mut self, fingerprint: &Fingerprint) -> Option<V> {
        self.values.shift_remove(fingerprint)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Fingerprint, V> {
        self.values.values()
    }

    /// Iterate mutably over values in insertion order.
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, Fingerprint, V> {
        self.values.values_mut()
    }

    pub(crate) fn into_values(self) -> indexmap::map::IntoValues<Fingerprint, V> {
        self.values.into_values()
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<V> Default for BackingStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
