//! Author-time region configuration.

use super::error::ConfigError;
use super::region::RegionId;
use super::state::RegionRole;
use serde::{Deserialize, Serialize};

/// Which layout children play which role.
///
/// Content is mandatory. Loading, empty and error fall back to built-in
/// regions when left unset.
///
/// Each `with_*` call returns a new value, so a base configuration can be
/// shared and specialised.
///
/// ```
/// use viewstate::view::RegionConfig;
///
/// let base = RegionConfig::new().with_loading("spinner");
/// let list = base.clone().with_content("list");
/// let grid = base.with_content("grid");
///
/// assert_eq!(list.content().map(|id| id.as_str()), Some("list"));
/// assert_eq!(grid.content().map(|id| id.as_str()), Some("grid"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    #[serde(default)]
    content: Option<RegionId>,
    #[serde(default)]
    loading: Option<RegionId>,
    #[serde(default)]
    empty: Option<RegionId>,
    #[serde(default)]
    error: Option<RegionId>,
}

impl RegionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(self, id: impl Into<RegionId>) -> Self {
        Self {
            content: Some(id.into()),
            ..self
        }
    }

    pub fn with_loading(self, id: impl Into<RegionId>) -> Self {
        Self {
            loading: Some(id.into()),
            ..self
        }
    }

    pub fn with_empty(self, id: impl Into<RegionId>) -> Self {
        Self {
            empty: Some(id.into()),
            ..self
        }
    }

    pub fn with_error(self, id: impl Into<RegionId>) -> Self {
        Self {
            error: Some(id.into()),
            ..self
        }
    }

    /// Parse a configuration such as
    /// `{"content": "list", "error": "custom_error"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn content(&self) -> Option<&RegionId> {
        self.content.as_ref()
    }

    /// Configured id for `role`, `None` when unset.
    pub fn id(&self, role: RegionRole) -> Option<&RegionId> {
        match role {
            RegionRole::Content => self.content.as_ref(),
            RegionRole::Loading => self.loading.as_ref(),
            RegionRole::Empty => self.empty.as_ref(),
            RegionRole::Error => self.error.as_ref(),
        }
    }

    /// Fail unless the mandatory content id is present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.content {
            Some(_) => Ok(()),
            None => Err(ConfigError::MissingContentId),
        }
    }
}
