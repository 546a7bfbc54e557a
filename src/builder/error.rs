//! Build errors for the registry builder.

use crate::fsm::FsmError;
use thiserror::Error;

/// Errors that can occur when building a registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error(transparent)]
    Fsm(#[from] FsmError),
}
