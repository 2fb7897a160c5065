//! Error types for the termgrid-protocol crate.
//!
//! Protocol types are plain values; the only fallible operations are parsing
//! them from their textual names.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A textual name did not match any variant of the expected type.
    #[error("unknown {kind}: {value:?}")]
    Unknown {
        /// The type being parsed (e.g. "breakpoint").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl ProtocolError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::Unknown {
            kind,
            value: value.to_string(),
        }
    }
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
