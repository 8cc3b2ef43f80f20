//! Iterators over a [`MultiKeyMap`](super::MultiKeyMap).
//!
//! Every iterator is created fresh by the corresponding map method and walks
//! entries in insertion order. They borrow the map, so the map cannot be
//! mutated while one is alive.

use std::iter::FusedIterator;

use indexmap::map;

use crate::encoding::Fingerprint;
use crate::key::Key;

/// Iterator over `(&Key, &V)` pairs.
pub struct Iter<'a, V> {
    keys: map::Values<'a, Fingerprint, Key>,
    values: map::Values<'a, Fingerprint, V>,
}

impl<'a, V> Iter<'a, V> {
    pub(super) fn new(
        keys: map::Values<'a, Fingerprint, Key>,
        values: map::Values<'a, Fingerprint, V>,
    ) -> Self {
        Self { keys, values }
    }
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.keys.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((self.keys.next_back()?, self.values.next_back()?))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// Iterator over keys.
#[derive(Clone)]
pub struct Keys<'a> {
    inner: map::Values<'a, Fingerprint, Key>,
}

impl<'a> Keys<'a> {
    pub(super) fn new(inner: map::Values<'a, Fingerprint, Key>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Keys<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Keys<'_> {}
impl FusedIterator for Keys<'_> {}

/// Iterator over values.
pub struct Values<'a, V> {
    inner: map::Values<'a, Fingerprint, V>,
}

impl<'a, V> Values<'a, V> {
    pub(super) fn new(inner: map::Values<'a, Fingerprint, V>) -> Self {
        Self { inner }
    }
}

impl<V> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Values<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
impl<V> FusedIterator for Values<'_, V> {}

/// Iterator over mutable values.
pub struct ValuesMut<'a, V> {
    inner: map::ValuesMut<'a, Fingerprint, V>,
}

impl<'a, V> ValuesMut<'a, V> {
    pub(super) fn new(inner: map::ValuesMut<'a, Fingerprint, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for ValuesMut<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}
impl<V> FusedIterator for ValuesMut<'_, V> {}

/// Owning iterator over `(Key, V)` pairs.
pub struct IntoIter<V> {
    keys: map::IntoValues<Fingerprint, Key>,
    values: map::IntoValues<Fingerprint, V>,
}

impl<V> IntoIter<V> {
    pub(super) fn new(
        keys: map::IntoValues<Fingerprint, Key>,
        values: map::IntoValues<Fingerprint, V>,
    ) -> Self {
        Self { keys, values }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (Key, V);

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.keys.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((self.keys.next_back()?, self.values.next_back()?))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}
