//! Viewstate: a small state machine and a view-state controller
//!
//! Two pieces make up the crate:
//!
//! - **State machine**: [`core::StateMachine`] holds one current state and
//!   runs its exit hook before the next state's enter hook, atomically
//!   across threads.
//! - **View-state controller**: [`view::ViewStateController`] shows exactly
//!   one of four regions (loading, empty, error, content) for the current
//!   [`view::ViewState`], and saves/restores that state across a
//!   teardown/recreate cycle through [`saved`].
//!
//! The GUI toolkit stays outside: regions are reached through the
//! [`view::RegionResolver`] and [`view::Region`] traits.
//!
//! # Example
//!
//! ```rust
//! use viewstate::core::{State, StateMachine};
//!
//! struct Screen(&'static str);
//!
//! impl State for Screen {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//!
//!     fn on_exit(&mut self) {
//!         println!("leaving {}", self.0);
//!     }
//! }
//!
//! let machine = StateMachine::new();
//! machine.transition(Screen("login"));
//! machine.transition(Screen("home"));
//! machine.finish(None);
//! assert!(machine.is_idle());
//! ```

// Lets `state_enum!` name serde as `viewstate::serde` from inside this crate too.
extern crate self as viewstate;

mod macros;

pub mod core;
pub mod error;
pub mod foreground;
pub mod saved;
pub mod testing;
pub mod view;

// Re-export commonly used types
pub use crate::core::{State, StateMachine};
pub use error::{Error, Result};
pub use view::{RegionConfig, ViewState, ViewStateController};

#[doc(hidden)]
pub use serde;
