//! Configuration errors raised by the view-state controller.

use super::region::RegionId;
use super::state::RegionRole;
use thiserror::Error;

/// A region that broke the hidden-at-start rule.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{role} region '{id}' is visible; declare it hidden or it will flicker")]
pub struct RegionFault {
    pub role: RegionRole,
    pub id: RegionId,
}

/// Errors caused by wiring the controller to a layout incorrectly.
///
/// These are integration mistakes, not runtime conditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("content region id not set; configure it with .with_content(id)")]
    MissingContentId,

    #[error("{role} region '{id}' not found in the containing layout")]
    RegionNotFound { role: RegionRole, id: RegionId },

    #[error("{} region(s) visible at resolution: {}", .0.len(), join_faults(.0))]
    RegionsVisible(Vec<RegionFault>),

    #[error("{role} region has no text element")]
    MissingTextSlot { role: RegionRole },

    #[error("Invalid region configuration: {0}")]
    Parse(String),
}

fn join_faults(faults: &[RegionFault]) -> String {
    faults
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
