//! The capability set every registered state implements.

use crate::core::State;

/// Behaviour bundle attached to one state key.
///
/// A registry calls `on_exit` on the node being left and then `on_entry` on
/// the node being entered, passing the same caller-supplied context to both.
/// `action_trigger` names the single outgoing edge of the node.
///
/// # Example
///
/// ```rust
/// use recollect::fsm::{Registry, StateNode};
/// use recollect::progress::ProgressKey;
///
/// struct Logged(ProgressKey, ProgressKey);
///
/// impl StateNode for Logged {
///     type Key = ProgressKey;
///     type Context = Vec<String>;
///
///     fn on_entry(&mut self, log: &mut Vec<String>) {
///         log.push(format!("enter {}", self.0));
///     }
///
///     fn action_trigger(&self) -> Option<ProgressKey> {
///         Some(self.1)
///     }
/// }
///
/// let mut log = Vec::new();
/// let mut registry = Registry::new();
/// registry.add_state(ProgressKey::Start, Logged(ProgressKey::Start, ProgressKey::Result)).unwrap();
/// registry.add_state(ProgressKey::Result, Logged(ProgressKey::Result, ProgressKey::Start)).unwrap();
/// registry.set_current_state(ProgressKey::Start, &mut log).unwrap();
/// registry.action_trigger(&mut log).unwrap();
///
/// assert_eq!(log, vec!["enter Start", "enter Result"]);
/// ```
pub trait StateNode {
    /// Key type identifying states in the registry.
    type Key: State;

    /// Whatever the node needs to reach while entering or leaving.
    type Context: ?Sized;

    /// Called once each time the registry makes this node current.
    fn on_entry(&mut self, _ctx: &mut Self::Context) {}

    /// Called once each time the registry moves away from this node.
    fn on_exit(&mut self, _ctx: &mut Self::Context) {}

    /// Destination requested when the machine is triggered in this state.
    ///
    /// `None` means the node has no outgoing edge.
    fn action_trigger(&self) -> Option<Self::Key> {
        None
    }
}
