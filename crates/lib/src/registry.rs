//! Identity registry for symbol and object components.
//!
//! Gives every distinct identity-compared referent a stable [`IdentityToken`]
//! so that keys containing it encode to the same fingerprint on every call.
//! Tokens are drawn from a monotonic counter and are never handed out twice,
//! not even across [`IdentityRegistry::reset`].
//!
//! # Retention
//!
//! Associations are keyed by the referent's allocation address. The registry
//! holds on to the referent so that the address cannot be recycled by an
//! unrelated allocation while the association exists:
//!
//! - [`Retention::Strong`] keeps a strong handle. Deleting every map entry that
//!   used a referent does not release its token; only `reset()` does. Memory
//!   held this way is bounded by the number of distinct referents seen since
//!   the last reset.
//! - [`Retention::Weak`] keeps a weak handle. Once the referent is dropped the
//!   slot is dead until [`IdentityRegistry::prune`] removes it. The weak handle
//!   keeps the allocation itself reserved, so the address is only recycled
//!   after the slot is gone.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use crate::config::Retention;
use crate::key::Reference;
use crate::key::component::Referent;

/// Opaque handle assigned to one distinct referent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityToken(u64);

impl IdentityToken {
    /// Raw token value, used by the key encoder.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone)]
enum Anchor {
    // Held only to pin the referent's address.
    Strong(#[allow(dead_code)] Referent),
    Weak(Weak<dyn std::any::Any + Send + Sync>),
}

impl Anchor {
    fn is_live(&self) -> bool {
        match self {
            Anchor::Strong(_) => true,
            Anchor::Weak(weak) => weak.strong_count() > 0,
        }
    }
}

#[derive(Clone)]
struct Slot {
    token: IdentityToken,
    anchor: Anchor,
}

/// Reference → [`IdentityToken`] table, growing monotonically until reset.
#[derive(Clone)]
pub struct IdentityRegistry {
    slots: HashMap<usize, Slot>,
    next_token: u64,
    retention: Retention,
}

impl IdentityRegistry {
    /// Create an empty registry with strong retention.
    pub fn new() -> Self {
        Self::with_retention(Retention::Strong)
    }

    /// Create an empty registry with the given retention policy.
    pub fn with_retention(retention: Retention) -> Self {
        Self {
            slots: HashMap::new(),
            next_token: 1,
            retention,
        }
    }

    /// The retention policy in effect.
    pub fn retention(&self) -> Retention {
        self.retention
    }

    /// Get the token for `reference`, allocating one on first sight.
    pub fn token_for(&mut self, reference: Reference<'_>) -> IdentityToken {
        let address = reference.address();
        if let Some(slot) = self.slots.get(&address) {
            return slot.token;
        }

        let token = IdentityToken(self.next_token);
        self.next_token += 1;

        let referent = reference.referent();
        let anchor = match self.retention {
            Retention::Strong => Anchor::Strong(referent),
            Retention::Weak => Anchor::Weak(Arc::downgrade(&referent)),
        };
        self.slots.insert(address, Slot { token, anchor });
        tracing::debug!(%token, kind = reference.kind(), "allocated identity token");
        token
    }

    /// Get the token for `reference` without allocating.
    ///
    /// Returns `None` for referents the registry has never seen; such a
    /// referent cannot be part of any stored key.
    pub fn lookup(&self, reference: Reference<'_>) -> Option<IdentityToken> {
        self.slots.get(&reference.address()).map(|slot| slot.token)
    }

    /// Number of associations held, including dead weak slots not yet pruned.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the registry holds no associations.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop associations whose referent is gone. Returns how many were removed.
    ///
    /// Always 0 under strong retention.
    pub fn prune(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, slot| slot.anchor.is_live());
        let removed = before - self.slots.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = self.slots.len(), "pruned identity registry");
        }
        removed
    }

    /// Discard every association.
    ///
    /// The token counter is not rewound, so a referent seen again afterwards
    /// gets a token it never had before.
    pub fn reset(&mut self) {
        let dropped = self.slots.len();
        self.slots.clear();
        tracing::debug!(dropped, "reset identity registry");
    }
}

impl Default for IdentityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdentityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityRegistry")
            .field("len", &self.slots.len())
            .field("next_token", &self.next_token)
            .field("retention", &self.retention)
            .finish()
    }
}
