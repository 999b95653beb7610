//! Core state machine types.
//!
//! This module contains the generic machinery:
//! - State definitions via the `State` trait
//! - A `StateMachine` that runs exit/enter hooks atomically
//!
//! Nothing here knows about views or regions.

mod machine;
mod state;

pub use machine::StateMachine;
pub use state::State;
