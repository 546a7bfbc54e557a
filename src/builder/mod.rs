//! Builder API for ergonomic registry construction.
//!
//! This module provides a fluent builder and the `state_enum!` macro for
//! declaring key enums, so machines are wired in one expression and come
//! out with a current state already selected.

pub mod error;
pub mod macros;
pub mod registry;

pub use error::BuildError;
pub use registry::RegistryBuilder;
