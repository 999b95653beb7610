//! Codecs turning a [`SavedState`] into an opaque token and back.

use super::error::SavedStateError;
use super::SavedState;

/// Encodes saved state into the bytes handed to the host.
pub trait StateCodec {
    fn encode(&self, saved: &SavedState) -> Result<Vec<u8>, SavedStateError>;

    /// Decode a token, rejecting versions newer than this crate knows.
    fn decode(&self, token: &[u8]) -> Result<SavedState, SavedStateError>;
}

/// Human-readable JSON; the view state is written by name.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl StateCodec for JsonCodec {
    fn encode(&self, saved: &SavedState) -> Result<Vec<u8>, SavedStateError> {
        serde_json::to_vec(saved).map_err(|e| SavedStateError::SerializationFailed(e.to_string()))
    }

    fn decode(&self, token: &[u8]) -> Result<SavedState, SavedStateError> {
        let saved: SavedState = serde_json::from_slice(token)
            .map_err(|e| SavedStateError::DeserializationFailed(e.to_string()))?;
        saved.check_version()
    }
}

/// Compact binary; the view state is written by ordinal.
#[derive(Clone, Copy, Debug, Default)]
pub struct BincodeCodec;

impl StateCodec for BincodeCodec {
    fn encode(&self, saved: &SavedState) -> Result<Vec<u8>, SavedStateError> {
        bincode::serialize(saved).map_err(|e| SavedStateError::SerializationFailed(e.to_string()))
    }

    fn decode(&self, token: &[u8]) -> Result<SavedState, SavedStateError> {
        let saved: SavedState = bincode::deserialize(token)
            .map_err(|e| SavedStateError::DeserializationFailed(e.to_string()))?;
        saved.check_version()
    }
}
