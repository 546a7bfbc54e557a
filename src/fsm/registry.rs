//! Keyed container of state nodes with a single active entry.

use crate::core::{State, StateHistory, StateTransition};
use crate::fsm::error::FsmError;
use crate::fsm::node::StateNode;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, warn};

/// Registry of state nodes keyed by their state.
///
/// Holds at most one node per key and at most one current key. The current
/// key is unset until the first successful [`set_current_state`]; registries
/// produced by [`RegistryBuilder`](crate::builder::RegistryBuilder) always
/// have one.
///
/// The registry performs no locking. Callers driving it from several places
/// must serialize access themselves.
///
/// [`set_current_state`]: Registry::set_current_state
pub struct Registry<N: StateNode> {
    nodes: HashMap<N::Key, N>,
    current: Option<N::Key>,
    history: StateHistory<N::Key>,
}

impl<N: StateNode> Registry<N> {
    /// Create an empty registry with no current state.
    pub fn new() -> Self {
        Self::with_history(StateHistory::new())
    }

    /// Create an empty registry whose history keeps at most `limit`
    /// transitions.
    pub fn with_history_limit(limit: usize) -> Self {
        Self::with_history(StateHistory::with_limit(limit))
    }

    fn with_history(history: StateHistory<N::Key>) -> Self {
        Self {
            nodes: HashMap::new(),
            current: None,
            history,
        }
    }

    /// Register `node` under `key`.
    ///
    /// Fails with [`FsmError::DuplicateState`] when the key is taken; the
    /// existing node is kept and the new one is dropped.
    pub fn add_state(&mut self, key: N::Key, node: N) -> Result<(), FsmError> {
        if self.nodes.contains_key(&key) {
            warn!(state = key.name(), "rejected duplicate state registration");
            return Err(FsmError::DuplicateState {
                state: key.name().to_string(),
            });
        }

        debug!(state = key.name(), "registered state");
        self.nodes.insert(key, node);
        Ok(())
    }

    /// Make the node registered under `key` current.
    ///
    /// Runs `on_exit` of the previous node (if any) to completion, switches
    /// the current key, then runs `on_entry` of the new node. Selecting the
    /// key that is already current exits and re-enters the same node.
    ///
    /// Fails with [`FsmError::UnknownState`] without touching anything when
    /// `key` was never registered.
    pub fn set_current_state(
        &mut self,
        key: N::Key,
        ctx: &mut N::Context,
    ) -> Result<(), FsmError> {
        if !self.nodes.contains_key(&key) {
            warn!(state = key.name(), "rejected transition to unknown state");
            return Err(FsmError::UnknownState {
                state: key.name().to_string(),
            });
        }

        let previous = self.current.clone();
        if let Some(node) = previous.as_ref().and_then(|prev| self.nodes.get_mut(prev)) {
            node.on_exit(ctx);
        }

        debug!(
            from = previous.as_ref().map(|s| s.name()),
            to = key.name(),
            "changing state"
        );
        self.history.record(StateTransition {
            from: previous,
            to: key.clone(),
            timestamp: Utc::now(),
        });
        self.current = Some(key.clone());

        if let Some(node) = self.nodes.get_mut(&key) {
            node.on_entry(ctx);
        }
        Ok(())
    }

    /// Follow the outgoing edge of the current node.
    ///
    /// Returns the key that was entered, or `None` when the current node has
    /// no edge or its key is final. Fails with [`FsmError::InvalidTrigger`]
    /// if no state has ever been made current.
    pub fn action_trigger(&mut self, ctx: &mut N::Context) -> Result<Option<N::Key>, FsmError> {
        let key = self.current.as_ref().ok_or(FsmError::InvalidTrigger)?;
        if key.is_final() {
            debug!(state = key.name(), "trigger ignored in final state");
            return Ok(None);
        }
        let node = self.current_state().ok_or(FsmError::InvalidTrigger)?;

        match node.action_trigger() {
            Some(next) => {
                self.set_current_state(next.clone(), ctx)?;
                Ok(Some(next))
            }
            None => Ok(None),
        }
    }

    /// The active node.
    pub fn current_state(&self) -> Option<&N> {
        self.current.as_ref().and_then(|key| self.nodes.get(key))
    }

    /// Key of the active node.
    pub fn current_key(&self) -> Option<&N::Key> {
        self.current.as_ref()
    }

    /// Node registered under `key`.
    pub fn get(&self, key: &N::Key) -> Option<&N> {
        self.nodes.get(key)
    }

    pub fn contains(&self, key: &N::Key) -> bool {
        self.nodes.contains_key(key)
    }

    /// Registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &N::Key> {
        self.nodes.keys()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Transitions performed so far.
    pub fn history(&self) -> &StateHistory<N::Key> {
        &self.history
    }

    /// States visited by repeatedly triggering, starting at `start`.
    ///
    /// Walks the `action_trigger` edges without running any hooks. The walk
    /// stops at the first state seen twice, at a final state or a node
    /// without an edge (both included), or at an edge pointing to an
    /// unregistered key (which is not included).
    pub fn reachable_from(&self, start: &N::Key) -> Vec<N::Key> {
        let mut visited = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = Some(start.clone());

        while let Some(key) = cursor {
            let Some(node) = self.nodes.get(&key) else {
                break;
            };
            if !seen.insert(key.clone()) {
                break;
            }
            cursor = if key.is_final() {
                None
            } else {
                node.action_trigger()
            };
            visited.push(key);
        }
        visited
    }
}

impl<N: StateNode> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: StateNode> fmt::Debug for Registry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("states", &self.nodes.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .field("transitions", &self.history.len())
            .finish()
    }
}
