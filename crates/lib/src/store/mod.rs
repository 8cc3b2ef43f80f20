//! Insertion-ordered storage keyed by [`Fingerprint`](crate::encoding::Fingerprint).
//!
//! The map keeps two parallel tables, both ordered by first insertion of a
//! fingerprint:
//!
//! - [`KeyDirectory`] - fingerprint → the key that first produced it
//! - [`BackingStore`] - fingerprint → value
//!
//! Both remove entries with order-preserving shifts, so position `i` in one
//! table always refers to the same fingerprint as position `i` in the other.

pub mod backing;
pub mod directory;

pub use backing::BackingStore;
pub use directory::KeyDirectory;
