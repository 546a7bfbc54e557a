//! Core state identity and history types.
//!
//! This module contains the pieces shared by every machine:
//! - State keys via the `State` trait
//! - Bounded history of the transitions a registry performed

mod history;
mod state;

pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::State;
