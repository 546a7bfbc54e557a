//! Errors raised by the state registry and the machines built on it.

use thiserror::Error;

/// Errors that can occur while wiring or driving a state machine.
///
/// All of them indicate mis-wiring by the caller; none are retried
/// internally and the registry is left unchanged when one is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("State '{state}' is already registered")]
    DuplicateState { state: String },

    #[error("State '{state}' is not registered")]
    UnknownState { state: String },

    #[error("No current state to trigger. Call set_current_state first")]
    InvalidTrigger,

    #[error("Trigger requested while a transition is already running")]
    ReentrantTrigger,

    #[error("Broadcast hooks cannot be changed or inspected while a broadcast is running")]
    BroadcastInFlight,
}
