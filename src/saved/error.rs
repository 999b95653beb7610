//! Saved-state error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a saved state
#[derive(Debug, Error)]
pub enum SavedStateError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Token was written by a newer version of this crate
    #[error("Unsupported saved state version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
