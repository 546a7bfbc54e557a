//! Generic keyed finite-state-machine engine.
//!
//! A [`Registry`] owns one [`StateNode`] per key and tracks which one is
//! current. Changing state runs the exit hook of the old node to completion
//! before the entry hook of the new one starts.

mod error;
mod node;
mod registry;

pub use error::FsmError;
pub use node::StateNode;
pub use registry::Registry;
