//! Construction-time configuration for [`MultiKeyMap`](crate::MultiKeyMap).
//!
//! The configuration is plain serde data so it can be embedded in a larger
//! application config document and loaded from JSON.
//!
//! ```
//! use multikey::config::{MapConfig, Retention};
//!
//! let config = MapConfig::from_json(r#"{ "retention": "weak" }"#).unwrap();
//! assert_eq!(config.retention, Retention::Weak);
//! assert_eq!(config.initial_capacity, 0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the identity registry holds on to object and symbol components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retention {
    /// Keep every referent alive until the map is cleared.
    ///
    /// Tokens are never released by `delete`; memory grows with the number of
    /// distinct references inserted since the last `clear()`.
    #[default]
    Strong,
    /// Observe referents through weak handles.
    ///
    /// Associations whose referent has been dropped can be released with
    /// [`IdentityRegistry::prune`](crate::registry::IdentityRegistry::prune).
    Weak,
}

/// Configuration for a [`MultiKeyMap`](crate::MultiKeyMap).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Retention policy of the identity registry.
    #[serde(default)]
    pub retention: Retention,

    /// Number of entries to reserve space for up front.
    #[serde(default)]
    pub initial_capacity: usize,
}

impl MapConfig {
    /// Create a default configuration (strong retention, no preallocation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retention policy.
    pub fn with_retention(mut self, retention: Retention) -> Self {
        self.retention = retention;
        self
    }

    /// Set the initial capacity.
    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Serialize this configuration as JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Errors produced while loading a [`MapConfig`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed
    #[error("Invalid map configuration: {reason}")]
    Parse { reason: String },
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}
