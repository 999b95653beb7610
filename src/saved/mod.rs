//! Save and restore of view state across a teardown/recreate cycle.
//!
//! The host hands the controller's token to its own state-restoration
//! mechanism and gives it back unmodified after recreation. The token is
//! opaque to the host; only the codecs here know its layout.

use crate::view::ViewState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod codec;
pub mod error;

pub use codec::{BincodeCodec, JsonCodec, StateCodec};
pub use error::SavedStateError;

/// Version identifier for the saved state format
pub const SAVED_STATE_VERSION: u32 = 1;

/// What a controller keeps across recreation.
///
/// Region handles and click listeners are deliberately absent; they are
/// looked up and bound again after recreation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    /// Saved state format version
    pub version: u32,

    pub state: ViewState,

    #[serde(default)]
    pub empty_message: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,

    /// When the snapshot was taken
    pub captured_at: DateTime<Utc>,
}

impl SavedState {
    pub fn new(
        state: ViewState,
        empty_message: Option<String>,
        error_message: Option<String>,
    ) -> Self {
        Self {
            version: SAVED_STATE_VERSION,
            state,
            empty_message,
            error_message,
            captured_at: Utc::now(),
        }
    }

    pub(crate) fn check_version(self) -> Result<Self, SavedStateError> {
        if self.version > SAVED_STATE_VERSION {
            return Err(SavedStateError::UnsupportedVersion {
                found: self.version,
                supported: SAVED_STATE_VERSION,
            });
        }
        Ok(self)
    }
}

impl Default for SavedState {
    fn default() -> Self {
        Self::new(ViewState::NotInit, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_uses_current_version() {
        let saved = SavedState::new(ViewState::Loading, None, None);
        assert_eq!(saved.version, SAVED_STATE_VERSION);
        assert_eq!(saved.state, ViewState::Loading);
    }

    #[test]
    fn newer_versions_are_rejected() {
        let saved = SavedState {
            version: SAVED_STATE_VERSION + 1,
            ..SavedState::default()
        };

        match saved.check_version() {
            Err(SavedStateError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, SAVED_STATE_VERSION + 1);
                assert_eq!(supported, SAVED_STATE_VERSION);
            }
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn older_versions_are_accepted() {
        let saved = SavedState {
            version: 0,
            ..SavedState::default()
        };
        assert!(saved.check_version().is_ok());
    }
}
