//! View-state controller and the region capabilities it relies on.
//!
//! A [`ViewStateController`] owns four regions (content, loading, empty,
//! error) and keeps exactly the one matching its current [`ViewState`]
//! visible. The host layout system is reached only through
//! [`RegionResolver`] and [`Region`].

mod config;
mod controller;
mod error;
mod region;
mod state;

pub use config::RegionConfig;
pub use controller::ViewStateController;
pub use error::{ConfigError, RegionFault};
pub use region::{ClickListener, Region, RegionId, RegionResolver, Visibility};
pub use state::{RegionRole, ViewState};
