//! Error types for key construction.
//!
//! Keys built through the typed API (`Key::from`, the `key!` macro, arrays of
//! components) cannot be malformed. The variants here cover the dynamic
//! boundaries, where a caller hands over something that is only checked at
//! runtime to be a key sequence.

use thiserror::Error;

/// Structured error types for key construction.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum KeyError {
    /// The key argument is not a finite ordered sequence of components
    #[error("Invalid key argument: {reason}")]
    InvalidArgument { reason: String },

    /// A JSON value could not be represented as a key component
    #[error("Unsupported JSON key component at index {index}: {reason}")]
    UnsupportedJson { index: usize, reason: String },
}

impl KeyError {
    /// Check if this error reports a non-sequence key argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, KeyError::InvalidArgument { .. })
    }

    /// Check if this error came from the JSON boundary
    pub fn is_json_error(&self) -> bool {
        matches!(self, KeyError::UnsupportedJson { .. })
    }

    /// Get the component index, if the error points at one
    pub fn index(&self) -> Option<usize> {
        match self {
            KeyError::UnsupportedJson { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Human-readable reason attached to the error
    pub fn reason(&self) -> &str {
        match self {
            KeyError::InvalidArgument { reason } | KeyError::UnsupportedJson { reason, .. } => {
                reason
            }
        }
    }
}

// Conversion from KeyError to the main Error type
impl From<KeyError> for crate::Error {
    fn from(err: KeyError) -> Self {
        crate::Error::Key(err)
    }
}
