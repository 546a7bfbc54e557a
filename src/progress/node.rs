//! State nodes and broadcast hooks of the progress machine.

use super::key::ProgressKey;
use crate::broadcast::Broadcast;
use crate::fsm::StateNode;
use std::fmt;
use tracing::trace;

/// One hook per phase, fired when that phase is entered.
#[derive(Debug, Default)]
pub struct Broadcasts {
    pub on_start: Broadcast,
    pub on_memorize: Broadcast,
    pub on_countdown: Broadcast,
    pub on_choose: Broadcast,
    pub on_result: Broadcast,
    pub on_restart: Broadcast,
}

impl Broadcasts {
    pub fn hook(&self, key: ProgressKey) -> &Broadcast {
        match key {
            ProgressKey::Start => &self.on_start,
            ProgressKey::Memorize => &self.on_memorize,
            ProgressKey::Countdown => &self.on_countdown,
            ProgressKey::Choose => &self.on_choose,
            ProgressKey::Result => &self.on_result,
            ProgressKey::Restart => &self.on_restart,
        }
    }

    pub fn hook_mut(&mut self, key: ProgressKey) -> &mut Broadcast {
        match key {
            ProgressKey::Start => &mut self.on_start,
            ProgressKey::Memorize => &mut self.on_memorize,
            ProgressKey::Countdown => &mut self.on_countdown,
            ProgressKey::Choose => &mut self.on_choose,
            ProgressKey::Result => &mut self.on_result,
            ProgressKey::Restart => &mut self.on_restart,
        }
    }

    /// Fire the hook of `key`, returning how many subscribers ran.
    pub fn fire(&mut self, key: ProgressKey) -> usize {
        trace!(state = %key, "broadcasting state entry");
        self.hook_mut(key).fire()
    }
}

/// Behaviour of each phase.
///
/// Entering a phase fires its hook; leaving one does nothing; triggering one
/// requests the fixed successor phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressNode {
    Start,
    Memorize,
    Countdown,
    Choose,
    Result,
    Restart,
}

impl ProgressNode {
    /// The key this node is registered under.
    pub fn key(self) -> ProgressKey {
        match self {
            Self::Start => ProgressKey::Start,
            Self::Memorize => ProgressKey::Memorize,
            Self::Countdown => ProgressKey::Countdown,
            Self::Choose => ProgressKey::Choose,
            Self::Result => ProgressKey::Result,
            Self::Restart => ProgressKey::Restart,
        }
    }
}

impl fmt::Display for ProgressNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} State", self.key())
    }
}

impl From<ProgressKey> for ProgressNode {
    fn from(key: ProgressKey) -> Self {
        match key {
            ProgressKey::Start => Self::Start,
            ProgressKey::Memorize => Self::Memorize,
            ProgressKey::Countdown => Self::Countdown,
            ProgressKey::Choose => Self::Choose,
            ProgressKey::Result => Self::Result,
            ProgressKey::Restart => Self::Restart,
        }
    }
}

impl StateNode for ProgressNode {
    type Key = ProgressKey;
    type Context = Broadcasts;

    fn on_entry(&mut self, hooks: &mut Broadcasts) {
        hooks.fire(self.key());
    }

    fn action_trigger(&self) -> Option<ProgressKey> {
        Some(self.key().successor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn node_and_key_correspond() {
        for &key in ProgressKey::ALL {
            assert_eq!(ProgressNode::from(key).key(), key);
        }
    }

    #[test]
    fn hook_lookup_matches_named_field() {
        let mut hooks = Broadcasts::default();
        hooks.on_choose.subscribe(|| {});

        assert_eq!(hooks.hook(ProgressKey::Choose).len(), 1);
        for &key in ProgressKey::ALL.iter().filter(|&&k| k != ProgressKey::Choose) {
            assert!(hooks.hook(key).is_empty());
        }
    }

    #[test]
    fn entry_fires_only_own_hook() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut hooks = Broadcasts::default();
        for &key in ProgressKey::ALL {
            let fired = Rc::clone(&fired);
            hooks.hook_mut(key).subscribe(move || fired.borrow_mut().push(key));
        }

        let mut node = ProgressNode::Result;
        node.on_entry(&mut hooks);
        node.on_exit(&mut hooks);

        assert_eq!(*fired.borrow(), vec![ProgressKey::Result]);
    }

    #[test]
    fn node_displays_as_phase_state() {
        assert_eq!(ProgressNode::Start.to_string(), "Start State");
        assert_eq!(ProgressNode::Countdown.to_string(), "Countdown State");
        assert_eq!(ProgressKey::Countdown.to_string(), "Countdown");
    }

    #[test]
    fn trigger_requests_successor() {
        for &key in ProgressKey::ALL {
            let node = ProgressNode::from(key);
            assert_eq!(node.action_trigger(), Some(key.successor()));
        }
    }
}
