//! Key canonicalization.
//!
//! [`KeyEncoder`] turns a key sequence into a [`Fingerprint`]: a byte string
//! that is equal for two keys exactly when the keys are equal under the mixed
//! value/identity rule of [`Component`].
//!
//! # Layout
//!
//! ```text
//! fingerprint := count:u64-be component*
//! component   := tag:u8 payload
//! ```
//!
//! | Tag | Kind   | Payload                                  |
//! |-----|--------|------------------------------------------|
//! | 1   | Absent | none                                     |
//! | 2   | Null   | none                                     |
//! | 3   | Bool   | one byte, 0 or 1                         |
//! | 4   | Number | canonical f64 bits, big-endian           |
//! | 5   | Text   | byte length u64-be, then UTF-8 bytes     |
//! | 6   | Symbol | identity token u64-be                    |
//! | 7   | Object | identity token u64-be                    |
//!
//! Every payload is either fixed-size or length-prefixed and the whole
//! sequence is count-prefixed, so no concatenation of components can alias
//! another key. Nested sequences are `Object`s and are never flattened.

use std::fmt;

use crate::config::Retention;
use crate::key::component::canonical_number;
use crate::key::{Component, Reference};
use crate::registry::{IdentityRegistry, IdentityToken};

/// Tag byte written before every component payload.
///
/// The values are part of the fingerprint format and must not change.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ComponentTag {
    Absent = 1,
    Null = 2,
    Bool = 3,
    Number = 4,
    Text = 5,
    Symbol = 6,
    Object = 7,
}

impl ComponentTag {
    /// Tag for a component.
    #[must_use]
    pub const fn of(component: &Component) -> Self {
        match component {
            Component::Absent => Self::Absent,
            Component::Null => Self::Null,
            Component::Bool(_) => Self::Bool,
            Component::Number(_) => Self::Number,
            Component::Text(_) => Self::Text,
            Component::Symbol(_) => Self::Symbol,
            Component::Object(_) => Self::Object,
        }
    }

    /// Stable byte value.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Canonical, comparable token for one key sequence.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(Box<[u8]>);

impl Fingerprint {
    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of components in the encoded key.
    pub fn component_count(&self) -> u64 {
        let mut count = [0u8; 8];
        count.copy_from_slice(&self.0[..8]);
        u64::from_be_bytes(count)
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}

/// Encodes keys into fingerprints, owning the identity registry that backs
/// symbol and object components.
#[derive(Debug, Clone, Default)]
pub struct KeyEncoder {
    registry: IdentityRegistry,
}

impl KeyEncoder {
    /// Create an encoder with an empty strong-retention registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with an empty registry using `retention`.
    pub fn with_retention(retention: Retention) -> Self {
        Self {
            registry: IdentityRegistry::with_retention(retention),
        }
    }

    /// Encode `key`, allocating identity tokens for unseen referents.
    pub fn encode(&mut self, key: &[Component]) -> Fingerprint {
        let registry = &mut self.registry;
        let (fingerprint, complete) = write_key(key, |r| Some(registry.token_for(r)));
        debug_assert!(complete, "allocating resolver never misses");
        fingerprint
    }

    /// Encode `key` without touching the registry.
    ///
    /// Returns `None` when a symbol or object in `key` has no token yet; no
    /// stored key can contain such a component.
    pub fn probe(&self, key: &[Component]) -> Option<Fingerprint> {
        let (fingerprint, complete) = write_key(key, |r| self.registry.lookup(r));
        complete.then_some(fingerprint)
    }

    /// The identity registry.
    pub fn registry(&self) -> &IdentityRegistry {
        &self.registry
    }

    /// Mutable access to the identity registry.
    pub fn registry_mut(&mut self) -> &mut IdentityRegistry {
        &mut self.registry
    }

    /// Forget every identity association.
    pub fn reset(&mut self) {
        self.registry.reset();
    }
}

// Returns the fingerprint and whether every reference was resolved. Encoding
// stops at the first unresolved reference.
fn write_key<F>(key: &[Component], mut resolve: F) -> (Fingerprint, bool)
where
    F: FnMut(Reference<'_>) -> Option<IdentityToken>,
{
    let mut out = Vec::with_capacity(8 + key.len() * 9);
    push_len(&mut out, key.len());

    let mut complete = true;
    for component in key {
        out.push(ComponentTag::of(component).to_u8());
        match component.as_reference() {
            Some(reference) => match resolve(reference) {
                Some(token) => out.extend_from_slice(&token.get().to_be_bytes()),
                None => {
                    complete = false;
                    break;
                }
            },
            None => push_literal_payload(&mut out, component),
        }
    }

    tracing::trace!(
        components = key.len(),
        bytes = out.len(),
        complete,
        "encoded key"
    );
    (Fingerprint(out.into_boxed_slice()), complete)
}

// Payload after the tag for value-compared components.
fn push_literal_payload(out: &mut Vec<u8>, component: &Component) {
    match component {
        // Tag-only encoding is canonical.
        Component::Absent | Component::Null => {}
        Component::Bool(b) => out.push(u8::from(*b)),
        Component::Number(n) => out.extend_from_slice(&canonical_number(*n).to_bits().to_be_bytes()),
        Component::Text(s) => {
            push_len(out, s.len());
            out.extend_from_slice(s.as_bytes());
        }
        Component::Symbol(_) | Component::Object(_) => {
            unreachable!("references are resolved through the registry")
        }
    }
}

fn push_len(out: &mut Vec<u8>, len: usize) {
    out.extend_from_slice(&(len as u64).to_be_bytes());
}
