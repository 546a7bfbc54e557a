//! Ordered subscriber lists fired when a state is entered.
//!
//! A [`Broadcast`] is the hook presentation code attaches to. Callbacks run
//! synchronously, in the order they were subscribed, on the call stack of
//! whatever fired the hook.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Handle returned by [`Broadcast::subscribe`].
///
/// Ids are never reused by the broadcast that issued them, so a stale
/// handle can never remove somebody else's callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn get(self) -> u64 {
        self.0
    }
}

type Callback = Box<dyn FnMut()>;

/// Ordered list of no-argument callbacks.
///
/// # Example
///
/// ```rust
/// use recollect::broadcast::Broadcast;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let hits = Rc::new(Cell::new(0));
/// let mut hook = Broadcast::new();
///
/// let counter = Rc::clone(&hits);
/// let id = hook.subscribe(move || counter.set(counter.get() + 1));
///
/// assert_eq!(hook.fire(), 1);
/// assert!(hook.unsubscribe(id));
/// assert_eq!(hook.fire(), 0);
/// assert_eq!(hits.get(), 1);
/// ```
#[derive(Default)]
pub struct Broadcast {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `callback` to the end of the list.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut() + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove the callback registered under `id`.
    ///
    /// Returns `false` when the id is unknown or was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.subscribers.iter().position(|(sub, _)| *sub == id) {
            Some(index) => {
                self.subscribers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Invoke every callback once, in subscription order.
    ///
    /// Returns how many callbacks ran.
    pub fn fire(&mut self) -> usize {
        trace!(subscribers = self.subscribers.len(), "firing broadcast");
        for (_, callback) in self.subscribers.iter_mut() {
            callback();
        }
        self.subscribers.len()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Drop every callback. Ids already issued stay retired.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}

impl fmt::Debug for Broadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
