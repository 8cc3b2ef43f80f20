//! The public tuple-keyed map.
//!
//! [`MultiKeyMap`] composes the pieces of the crate: every operation first
//! encodes its key with the [`KeyEncoder`], then reads or writes the
//! [`BackingStore`] and, when an entry is added or removed, the
//! [`KeyDirectory`].

pub mod iter;

use std::fmt;

use crate::config::{MapConfig, Retention};
use crate::encoding::{Fingerprint, KeyEncoder};
use crate::key::{Component, Key};
use crate::registry::IdentityRegistry;
use crate::store::{BackingStore, KeyDirectory};

pub use iter::{IntoIter, Iter, Keys, Values, ValuesMut};

/// An insertion-ordered map whose keys are sequences of [`Component`]s.
///
/// Primitive components match by value; [`Symbol`](crate::Symbol) and
/// [`Object`](crate::Object) components match by identity.
///
/// # Examples
///
/// ```
/// use multikey::{MultiKeyMap, Object, key};
///
/// let mut map = MultiKeyMap::new();
/// map.set(key!["-"], "first").set(key![":", "-"], "second");
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(key![":", "-"]), Some(&"second"));
///
/// // A prefix or an extension is a different key.
/// assert_eq!(map.get(key![":"]), None);
/// assert_eq!(map.get(key![":", "-", "extra"]), None);
///
/// // Objects match only themselves.
/// let obj = Object::new(vec![1, 2]);
/// map.set(key![obj.clone()], "object");
/// assert_eq!(map.get(key![obj]), Some(&"object"));
/// assert_eq!(map.get(key![Object::new(vec![1, 2])]), None);
/// ```
///
/// # Identity retention
///
/// The map remembers every symbol and object it has stored a key for, even
/// after the entry is deleted, until [`MultiKeyMap::clear`]. With
/// [`Retention::Weak`] dropped referents can be released early with
/// [`MultiKeyMap::prune_identities`].
///
/// # Concurrency
///
/// The map is not internally synchronized. It is `Send` and `Sync` whenever
/// `V` is, so it can be shared behind a `Mutex` or `RwLock`.
#[derive(Clone)]
pub struct MultiKeyMap<V> {
    encoder: KeyEncoder,
    directory: KeyDirectory,
    store: BackingStore<V>,
}

impl<V> MultiKeyMap<V> {
    /// Create an empty map with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MapConfig::default())
    }

    /// Create an empty map from a configuration.
    pub fn with_config(config: MapConfig) -> Self {
        Self {
            encoder: KeyEncoder::with_retention(config.retention),
            directory: KeyDirectory::with_capacity(config.initial_capacity),
            store: BackingStore::with_capacity(config.initial_capacity),
        }
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(MapConfig::new().with_capacity(capacity))
    }

    /// Create a map by setting each pair in order.
    ///
    /// A later pair with an equal key overwrites the earlier value but keeps
    /// the earlier position.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        map.extend(pairs);
        map
    }

    /// Get the value stored for `key`.
    pub fn get(&self, key: impl AsRef<[Component]>) -> Option<&V> {
        let fingerprint = self.encoder.probe(key.as_ref())?;
        self.store.get(&fingerprint)
    }

    /// Get a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: impl AsRef<[Component]>) -> Option<&mut V> {
        let fingerprint = self.encoder.probe(key.as_ref())?;
        self.store.get_mut(&fingerprint)
    }

    /// Get the stored key and value for `key`.
    ///
    /// The returned key is the one the entry was first inserted with.
    pub fn get_key_value(&self, key: impl AsRef<[Component]>) -> Option<(&Key, &V)> {
        let fingerprint = self.encoder.probe(key.as_ref())?;
        Some((
            self.directory.get(&fingerprint)?,
            self.store.get(&fingerprint)?,
        ))
    }

    /// Set the value for `key`, returning the map for chaining.
    ///
    /// A new key is appended at the end of iteration order. An existing key
    /// keeps its position and only has its value replaced.
    pub fn set(&mut self, key: impl Into<Key>, value: V) -> &mut Self {
        self.insert(key, value);
        self
    }

    /// Set the value for `key`, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        let key = key.into();
        let fingerprint = self.encoder.encode(key.components());
        let previous = self.store.insert(fingerprint.clone(), value);
        if previous.is_none() {
            self.directory.insert(fingerprint.clone(), || key);
            tracing::debug!(fingerprint = %fingerprint, len = self.store.len(), "inserted entry");
        }
        self.debug_check();
        previous
    }

    /// Check whether `key` is present.
    pub fn has(&self, key: impl AsRef<[Component]>) -> bool {
        self.encoder
            .probe(key.as_ref())
            .is_some_and(|fingerprint| self.store.contains(&fingerprint))
    }

    /// Alias of [`MultiKeyMap::has`].
    pub fn contains_key(&self, key: impl AsRef<[Component]>) -> bool {
        self.has(key)
    }

    /// Delete the entry for `key`. Returns true if an entry was removed.
    ///
    /// Identity tokens of symbols and objects in the key stay allocated; see
    /// [`MultiKeyMap::clear`].
    pub fn delete(&mut self, key: impl AsRef<[Component]>) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Remove the entry for `key`, returning its value.
    pub fn remove(&mut self, key: impl AsRef<[Component]>) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove the entry for `key`, returning the stored key and value.
    pub fn remove_entry(&mut self, key: impl AsRef<[Component]>) -> Option<(Key, V)> {
        let fingerprint = self.encoder.probe(key.as_ref())?;
        let value = self.store.remove(&fingerprint)?;
        let stored = self.directory.remove(&fingerprint);
        self.debug_check();
        tracing::debug!(fingerprint = %fingerprint, len = self.store.len(), "removed entry");
        // Both tables always hold the same fingerprints.
        stored.map(|key| (key, value))
    }

    /// Remove every entry and forget every identity.
    ///
    /// This is the only operation that releases identity tokens under
    /// [`Retention::Strong`]. A symbol or object stored again afterwards is
    /// treated as never seen.
    pub fn clear(&mut self) {
        let entries = self.store.len();
        let identities = self.encoder.registry().len();
        self.store.clear();
        self.directory.clear();
        self.encoder.reset();
        tracing::debug!(entries, identities, "cleared map");
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.directory.keys(), self.store.values())
    }

    /// Alias of [`MultiKeyMap::iter`].
    pub fn entries(&self) -> Iter<'_, V> {
        self.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.directory.keys())
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.store.values())
    }

    /// Iterate mutably over values in insertion order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut::new(self.store.values_mut())
    }

    /// Call `callback(value, key, map)` once per entry in insertion order.
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&V, &Key, &Self),
    {
        for (key, value) in self.iter() {
            callback(value, key, self);
        }
    }

    /// Fingerprint `key` would be stored under, if it can be stored already.
    ///
    /// `None` when the key contains a symbol or object this map has never
    /// seen.
    pub fn fingerprint_of(&self, key: impl AsRef<[Component]>) -> Option<Fingerprint> {
        self.encoder.probe(key.as_ref())
    }

    /// The fingerprint → key directory.
    pub fn directory(&self) -> &KeyDirectory {
        &self.directory
    }

    /// The identity registry.
    pub fn registry(&self) -> &IdentityRegistry {
        self.encoder.registry()
    }

    /// Retention policy of the identity registry.
    pub fn retention(&self) -> Retention {
        self.encoder.registry().retention()
    }

    /// Release identities whose referent has been dropped (weak retention).
    ///
    /// Returns the number of identities released; always 0 under
    /// [`Retention::Strong`].
    pub fn prune_identities(&mut self) -> usize {
        self.encoder.registry_mut().prune()
    }

    fn debug_check(&self) {
        debug_assert_eq!(
            self.directory.len(),
            self.store.len(),
            "key directory and backing store out of sync"
        );
    }
}

impl<V> Default for MultiKeyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for MultiKeyMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for MultiKeyMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for MultiKeyMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, V> IntoIterator for &'a MultiKeyMap<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for MultiKeyMap<V> {
    type Item = (Key, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.directory.into_keys(), self.store.into_values())
    }
}
