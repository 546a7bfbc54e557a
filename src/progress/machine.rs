//! The game-progress state machine.

use super::key::ProgressKey;
use super::node::{Broadcasts, ProgressNode};
use crate::broadcast::SubscriptionId;
use crate::builder::RegistryBuilder;
use crate::core::{StateHistory, DEFAULT_HISTORY_LIMIT};
use crate::fsm::{FsmError, Registry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Handle returned when subscribing to a phase hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subscription {
    pub key: ProgressKey,
    pub id: SubscriptionId,
}

/// Drives a round of the memory game through its phases.
///
/// Owns the registry of all six phase nodes and their broadcast hooks. The
/// machine starts in [`ProgressKey::Start`] and moves along exactly one edge
/// per [`action_trigger`](ProgressState::action_trigger) call.
///
/// # Example
///
/// ```rust
/// use recollect::progress::{ProgressKey, ProgressState};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let shown = Rc::new(RefCell::new(Vec::new()));
/// let mut progress = ProgressState::new();
///
/// let log = Rc::clone(&shown);
/// progress.on_memorize(move || log.borrow_mut().push("reveal cards"));
///
/// assert_eq!(progress.action_trigger().unwrap(), ProgressKey::Memorize);
/// assert_eq!(*shown.borrow(), vec!["reveal cards"]);
/// ```
#[derive(Debug)]
pub struct ProgressState {
    registry: Registry<ProgressNode>,
    hooks: Broadcasts,
}

impl ProgressState {
    /// Create a machine in the Start phase.
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a machine whose history keeps at most `limit` transitions.
    pub fn with_history_limit(limit: usize) -> Self {
        // Hooks are still empty here, so entering Start is not observable.
        let mut hooks = Broadcasts::default();
        let registry = RegistryBuilder::new()
            .states(
                ProgressKey::ALL
                    .iter()
                    .map(|&key| (key, ProgressNode::from(key))),
            )
            .initial(ProgressKey::Start)
            .history_limit(limit)
            .build(&mut hooks)
            .expect("progress phases are registered once each and include Start");

        Self { registry, hooks }
    }

    /// Advance the machine by one edge and return the phase entered.
    ///
    /// Subscribers of the entered phase run before this returns.
    pub fn action_trigger(&mut self) -> Result<ProgressKey, FsmError> {
        let from = self.current_key();
        let to = self
            .registry
            .action_trigger(&mut self.hooks)?
            .expect("every progress phase has a successor and none is final");

        debug!(%from, %to, "progress advanced");
        Ok(to)
    }

    /// The current phase.
    pub fn current_key(&self) -> ProgressKey {
        self.registry
            .current_key()
            .copied()
            .expect("progress registry enters Start on construction")
    }

    /// Run `callback` every time `key` is entered.
    pub fn subscribe<F>(&mut self, key: ProgressKey, callback: F) -> Subscription
    where
        F: FnMut() + 'static,
    {
        let id = self.hooks.hook_mut(key).subscribe(callback);
        debug!(state = %key, id = id.get(), "subscribed to state entry");
        Subscription { key, id }
    }

    /// Remove a callback. Returns `false` for handles already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.hooks
            .hook_mut(subscription.key)
            .unsubscribe(subscription.id)
    }

    pub fn on_start<F: FnMut() + 'static>(&mut self, callback: F) -> Subscription {
        self.subscribe(ProgressKey::Start, callback)
    }

    pub fn on_memorize<F: FnMut() + 'static>(&mut self, callback: F) -> Subscription {
        self.subscribe(ProgressKey::Memorize, callback)
    }

    pub fn on_countdown<F: FnMut() + 'static>(&mut self, callback: F) -> Subscription {
        self.subscribe(ProgressKey::Countdown, callback)
    }

    pub fn on_choose<F: FnMut() + 'static>(&mut self, callback: F) -> Subscription {
        self.subscribe(ProgressKey::Choose, callback)
    }

    pub fn on_result<F: FnMut() + 'static>(&mut self, callback: F) -> Subscription {
        self.subscribe(ProgressKey::Result, callback)
    }

    pub fn on_restart<F: FnMut() + 'static>(&mut self, callback: F) -> Subscription {
        self.subscribe(ProgressKey::Restart, callback)
    }

    pub fn hooks(&self) -> &Broadcasts {
        &self.hooks
    }

    /// Phases entered so far, including the initial Start.
    pub fn history(&self) -> &StateHistory<ProgressKey> {
        self.registry.history()
    }

    /// Phases visited by repeated triggering from the current phase.
    pub fn reachable_states(&self) -> Vec<ProgressKey> {
        self.registry.reachable_from(&self.current_key())
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Fired = Rc<RefCell<Vec<ProgressKey>>>;

    fn observed() -> (ProgressState, Fired) {
        let fired: Fired = Rc::new(RefCell::new(Vec::new()));
        let mut progress = ProgressState::new();
        for &key in ProgressKey::ALL {
            let fired = Rc::clone(&fired);
            progress.subscribe(key, move || fired.borrow_mut().push(key));
        }
        (progress, fired)
    }

    #[test]
    fn starts_in_start_phase() {
        let progress = ProgressState::new();
        assert_eq!(progress.current_key(), ProgressKey::Start);
        assert_eq!(progress.history().get_path(), vec![&ProgressKey::Start]);
    }

    #[test]
    fn first_trigger_enters_memorize() {
        let (mut progress, fired) = observed();

        assert_eq!(progress.action_trigger(), Ok(ProgressKey::Memorize));
        assert_eq!(progress.current_key(), ProgressKey::Memorize);
        assert_eq!(*fired.borrow(), vec![ProgressKey::Memorize]);
    }

    #[test]
    fn triggers_cycle_back_to_start() {
        let (mut progress, fired) = observed();

        for _ in 0..3 {
            progress.action_trigger().unwrap();
        }

        assert_eq!(progress.current_key(), ProgressKey::Start);
        assert_eq!(
            *fired.borrow(),
            vec![
                ProgressKey::Memorize,
                ProgressKey::Restart,
                ProgressKey::Start
            ]
        );
    }

    #[test]
    fn subscribers_fire_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut progress = ProgressState::new();
        for label in ["banner", "avatars", "button"] {
            let order = Rc::clone(&order);
            progress.on_memorize(move || order.borrow_mut().push(label));
        }

        progress.action_trigger().unwrap();

        assert_eq!(*order.borrow(), vec!["banner", "avatars", "button"]);
    }

    #[test]
    fn unsubscribed_callback_no_longer_fires() {
        let (mut progress, fired) = observed();
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let sub = progress.on_restart(move || *counter.borrow_mut() += 1);

        assert!(progress.unsubscribe(sub));
        assert!(!progress.unsubscribe(sub));
        progress.action_trigger().unwrap();
        progress.action_trigger().unwrap();

        assert_eq!(*hits.borrow(), 0);
        assert_eq!(
            *fired.borrow(),
            vec![ProgressKey::Memorize, ProgressKey::Restart]
        );
    }

    #[test]
    fn named_helpers_target_their_phase() {
        let mut progress = ProgressState::new();
        let subs = [
            progress.on_start(|| {}),
            progress.on_memorize(|| {}),
            progress.on_countdown(|| {}),
            progress.on_choose(|| {}),
            progress.on_result(|| {}),
            progress.on_restart(|| {}),
        ];

        let keys: Vec<ProgressKey> = subs.iter().map(|s| s.key).collect();
        assert_eq!(keys, ProgressKey::ALL.to_vec());
        for &key in ProgressKey::ALL {
            assert_eq!(progress.hooks().hook(key).len(), 1);
        }
    }

    #[test]
    fn reachable_states_skip_countdown_branch() {
        let progress = ProgressState::new();
        assert_eq!(
            progress.reachable_states(),
            vec![
                ProgressKey::Start,
                ProgressKey::Memorize,
                ProgressKey::Restart
            ]
        );
    }

    #[test]
    fn every_trigger_enters_the_successor_phase() {
        let mut progress = ProgressState::new();
        for _ in 0..12 {
            let before = progress.current_key();
            assert_eq!(progress.action_trigger(), Ok(before.successor()));
            assert_eq!(progress.current_key(), before.successor());
        }
    }

    #[test]
    fn history_respects_limit() {
        let mut progress = ProgressState::with_history_limit(3);
        for _ in 0..10 {
            progress.action_trigger().unwrap();
        }
        assert_eq!(progress.history().len(), 3);
    }
}
