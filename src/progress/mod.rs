//! Turn-sequence state machine of the memory-matching game.
//!
//! Six phases are registered in a [`Registry`](crate::fsm::Registry), each
//! bound to one broadcast hook. Presentation code subscribes to the hooks
//! and calls [`ProgressState::action_trigger`] when the player acts; the
//! machine never advances on its own.
//!
//! ```text
//! Start -> Memorize -> Restart -> Start -> ...
//! Countdown -> Choose -> Result -> Restart
//! ```

mod key;
mod machine;
mod node;
mod shared;

pub use key::ProgressKey;
pub use machine::{ProgressState, Subscription};
pub use node::{Broadcasts, ProgressNode};
pub use shared::{SharedProgress, WeakProgress};
