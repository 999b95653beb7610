//! Crate-level error type.

use crate::saved::SavedStateError;
use crate::view::ConfigError;
use thiserror::Error;

/// Result alias defaulting to the crate-level [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any error the crate can return.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    SavedState(#[from] SavedStateError),
}
