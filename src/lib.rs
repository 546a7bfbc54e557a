//! Recollect: the turn-progress engine of a memory-matching card game
//!
//! The crate is split into a generic finite-state-machine engine and the
//! concrete machine that drives a round of the game.
//!
//! # Core Concepts
//!
//! - **State**: closed set of keys identifying states, via the `State` trait
//! - **StateNode**: entry, exit and trigger behaviour attached to a key
//! - **Registry**: keyed node container tracking the single current state
//! - **Broadcast**: ordered subscriber list fired when a state is entered
//! - **History**: bounded log of the transitions a registry performed
//!
//! # Example
//!
//! ```rust
//! use recollect::progress::{ProgressKey, ProgressState};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let restarts = Rc::new(Cell::new(0));
//! let mut progress = ProgressState::new();
//!
//! let counter = Rc::clone(&restarts);
//! progress.on_restart(move || counter.set(counter.get() + 1));
//!
//! progress.action_trigger().unwrap(); // Memorize
//! progress.action_trigger().unwrap(); // Restart
//! progress.action_trigger().unwrap(); // Start
//!
//! assert_eq!(progress.current_key(), ProgressKey::Start);
//! assert_eq!(restarts.get(), 1);
//! ```

pub mod broadcast;
pub mod builder;
pub mod core;
pub mod fsm;
pub mod progress;

// Re-export commonly used types
pub use broadcast::{Broadcast, SubscriptionId};
pub use builder::{BuildError, RegistryBuilder};
pub use self::core::{State, StateHistory, StateTransition};
pub use fsm::{FsmError, Registry, StateNode};
pub use progress::{ProgressKey, ProgressState, SharedProgress};
