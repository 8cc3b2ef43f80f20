//! Key model: typed components and the sequences built from them.
//!
//! - [`Component`] - one typed element, compared by value or by identity
//! - [`Key`] - an ordered sequence of components
//! - [`Object`], [`Symbol`] - the identity-compared component kinds

pub mod component;
pub mod sequence;

pub use component::{Component, Object, Reference, Symbol};
pub use sequence::Key;
