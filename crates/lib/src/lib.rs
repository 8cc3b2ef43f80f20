//!
//! multikey: insertion-ordered maps keyed by heterogeneous tuples.
//!
//! A key is an ordered sequence of components. Two keys are the same key when
//! they have the same length and every pair of components is equal, where
//! primitive components compare by value and symbols and objects compare by
//! identity.
//!
//! ## Core Concepts
//!
//! * **Components (`key::Component`)**: One typed element of a key: absent, null, booleans, numbers (NaN equals NaN), text, symbols, and objects.
//! * **Keys (`key::Key`)**: Ordered sequences of components, built with `Key::from`, arrays, or the [`key!`] macro.
//! * **Identity registry (`registry::IdentityRegistry`)**: Assigns a stable token to every symbol and object seen as a key component.
//! * **Key encoder (`encoding::KeyEncoder`)**: Turns a key into a canonical `Fingerprint`, consulting the registry for identity-compared components.
//! * **Storage (`store`)**: The fingerprint → key directory and the fingerprint → value store, both in insertion order.
//! * **Maps (`map::MultiKeyMap`)**: The public container composed from the pieces above.
//!
//! ```
//! use multikey::{MultiKeyMap, Symbol, key};
//!
//! let tag = Symbol::new("tag");
//! let mut map = MultiKeyMap::new();
//! map.set(key![1, "1", true], "truthy")
//!    .set(key![tag.clone(), _], "tagged");
//!
//! assert_eq!(map.get(key![1, "1", true]), Some(&"truthy"));
//! assert_eq!(map.get(key![tag, None::<i32>]), Some(&"tagged"));
//! assert_eq!(map.get(key![Symbol::new("tag"), _]), None);
//! ```

pub mod config;
pub mod encoding;
pub mod errors;
pub mod key;
pub mod map;
pub mod registry;
pub mod store;

pub use config::{MapConfig, Retention};
pub use encoding::{Fingerprint, KeyEncoder};
pub use errors::KeyError;
pub use key::{Component, Key, Object, Symbol};
pub use map::MultiKeyMap;
pub use registry::{IdentityRegistry, IdentityToken};

/// Result type used throughout the multikey library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the multikey library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured key construction errors from the key module
    #[error(transparent)]
    Key(errors::KeyError),

    /// Structured configuration errors from the config module
    #[error(transparent)]
    Config(config::ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Key(_) => "key",
            Error::Config(_) => "config",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error reports a key argument that is not a sequence.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Key(key_err) => key_err.is_invalid_argument(),
            _ => false,
        }
    }

    /// Check if this error is key-related.
    pub fn is_key_error(&self) -> bool {
        matches!(self, Error::Key(_))
    }

    /// Check if this error is configuration-related.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
