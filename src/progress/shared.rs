//! Shared handle to a progress machine for callback-driven presentation code.

use super::key::ProgressKey;
use super::machine::{ProgressState, Subscription};
use crate::fsm::FsmError;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::warn;

/// Cloneable handle to one [`ProgressState`].
///
/// Presentation components that need to drive the machine (for example a
/// button that triggers the next phase) hold a clone of this handle instead
/// of reaching for a global instance. Every clone refers to the same
/// machine.
///
/// Calls made from inside a broadcast callback are rejected rather than
/// nested: `action_trigger` fails with [`FsmError::ReentrantTrigger`] and
/// the other operations fail with [`FsmError::BroadcastInFlight`].
///
/// # Example
///
/// ```rust
/// use recollect::fsm::FsmError;
/// use recollect::progress::{ProgressKey, SharedProgress};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let progress = SharedProgress::new();
/// let inner = Rc::new(RefCell::new(None));
///
/// let handle = progress.downgrade();
/// let seen = Rc::clone(&inner);
/// progress
///     .subscribe(ProgressKey::Memorize, move || {
///         let machine = handle.upgrade().unwrap();
///         *seen.borrow_mut() = Some(machine.action_trigger());
///     })
///     .unwrap();
///
/// assert_eq!(progress.action_trigger(), Ok(ProgressKey::Memorize));
/// assert_eq!(*inner.borrow(), Some(Err(FsmError::ReentrantTrigger)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedProgress {
    inner: Rc<RefCell<ProgressState>>,
}

/// Non-owning handle, for callbacks stored inside the machine itself.
#[derive(Clone, Debug, Default)]
pub struct WeakProgress {
    inner: Weak<RefCell<ProgressState>>,
}

impl SharedProgress {
    pub fn new() -> Self {
        Self::from(ProgressState::new())
    }

    /// Advance the machine by one edge and return the phase entered.
    pub fn action_trigger(&self) -> Result<ProgressKey, FsmError> {
        let mut machine = self.inner.try_borrow_mut().map_err(|_| {
            warn!("rejected trigger issued during a broadcast");
            FsmError::ReentrantTrigger
        })?;
        machine.action_trigger()
    }

    /// The current phase.
    ///
    /// Fails with [`FsmError::BroadcastInFlight`] when called from a
    /// subscriber callback, because the machine is still borrowed by the
    /// transition that fired it. Each hook belongs to exactly one phase, so
    /// a callback already knows the phase it was called for.
    pub fn current_key(&self) -> Result<ProgressKey, FsmError> {
        let machine = self
            .inner
            .try_borrow()
            .map_err(|_| FsmError::BroadcastInFlight)?;
        Ok(machine.current_key())
    }

    pub fn subscribe<F>(&self, key: ProgressKey, callback: F) -> Result<Subscription, FsmError>
    where
        F: FnMut() + 'static,
    {
        let mut machine = self.borrow_idle()?;
        Ok(machine.subscribe(key, callback))
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> Result<bool, FsmError> {
        let mut machine = self.borrow_idle()?;
        Ok(machine.unsubscribe(subscription))
    }

    /// Handle that does not keep the machine alive.
    ///
    /// Callbacks subscribed to this machine should capture a weak handle;
    /// a strong one would form a reference cycle with the hook that stores
    /// the callback.
    pub fn downgrade(&self) -> WeakProgress {
        WeakProgress {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Run `f` with read access to the machine.
    pub fn with<R>(&self, f: impl FnOnce(&ProgressState) -> R) -> Result<R, FsmError> {
        let machine = self
            .inner
            .try_borrow()
            .map_err(|_| FsmError::BroadcastInFlight)?;
        Ok(f(&machine))
    }

    fn borrow_idle(&self) -> Result<std::cell::RefMut<'_, ProgressState>, FsmError> {
        self.inner.try_borrow_mut().map_err(|_| {
            warn!("rejected hook change during a broadcast");
            FsmError::BroadcastInFlight
        })
    }
}

impl From<ProgressState> for SharedProgress {
    fn from(machine: ProgressState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(machine)),
        }
    }
}

impl WeakProgress {
    /// Strong handle, if the machine is still alive.
    pub fn upgrade(&self) -> Option<SharedProgress> {
        self.inner.upgrade().map(|inner| SharedProgress { inner })
    }
}
