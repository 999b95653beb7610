//! The five view states and the region roles they map onto.

use crate::state_enum;
use serde::{Deserialize, Serialize};
use std::fmt;

state_enum! {
    /// Data state of a screen section.
    ///
    /// Every state can be reached from every other one; `NotInit` is only
    /// ever the starting point.
    pub enum ViewState {
        /// Loading has not started yet
        NotInit,
        /// Loading started
        Loading,
        /// Loading finished and the data is empty
        Empty,
        /// Loading finished with data
        Content,
        /// Loading finished with an error
        Error,
    }
}

impl ViewState {
    /// Region shown while in this state. `NotInit` shows nothing.
    pub fn region(&self) -> Option<RegionRole> {
        match self {
            Self::NotInit => None,
            Self::Loading => Some(RegionRole::Loading),
            Self::Empty => Some(RegionRole::Empty),
            Self::Content => Some(RegionRole::Content),
            Self::Error => Some(RegionRole::Error),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::NotInit
    }
}

/// One of the four mutually exclusive regions a controller manages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RegionRole {
    Content,
    Loading,
    Empty,
    Error,
}

impl RegionRole {
    /// Every role, in slot order.
    pub const ALL: [RegionRole; 4] = [
        RegionRole::Content,
        RegionRole::Loading,
        RegionRole::Empty,
        RegionRole::Error,
    ];

    /// Roles that fall back to a built-in region when no id is configured.
    pub const REPLACEABLE: [RegionRole; 3] =
        [RegionRole::Loading, RegionRole::Empty, RegionRole::Error];

    /// Lowercase role name, as used in configuration keys and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Loading => "loading",
            Self::Empty => "empty",
            Self::Error => "error",
        }
    }

    /// Slot of this role in the controller's region table.
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Content => 0,
            Self::Loading => 1,
            Self::Empty => 2,
            Self::Error => 3,
        }
    }
}

impl fmt::Display for RegionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
