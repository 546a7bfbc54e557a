//! State transition history tracking.
//!
//! A registry records every successful state change here, giving callers an
//! ordered view of the path the machine took without having to subscribe
//! to any hook.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of transitions a history keeps before dropping the oldest.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Record of a single state transition.
///
/// `from` is `None` for the first activation of a registry, when there was
/// no previous state to leave.
///
/// # Example
///
/// ```rust
/// use recollect::core::StateTransition;
/// use recollect::progress::ProgressKey;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Some(ProgressKey::Start),
///     to: ProgressKey::Memorize,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.from.is_some());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left, if any
    pub from: Option<S>,
    /// The state being entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of state transitions.
///
/// Once `limit` transitions are stored, recording another drops the oldest.
/// A cyclic machine can run indefinitely without the log growing without
/// bound.
///
/// # Example
///
/// ```rust
/// use recollect::core::{StateHistory, StateTransition};
/// use recollect::progress::ProgressKey;
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: None,
///     to: ProgressKey::Start,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: Some(ProgressKey::Start),
///     to: ProgressKey::Memorize,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&ProgressKey::Start, &ProgressKey::Memorize]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history holding up to [`DEFAULT_HISTORY_LIMIT`]
    /// transitions.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new empty history holding up to `limit` transitions.
    ///
    /// A limit of zero is raised to one so the latest transition is always
    /// available.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Append a transition, dropping the oldest ones past the limit.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
        if self.transitions.len() > self.limit {
            let excess = self.transitions.len() - self.limit;
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition (when it
    /// has one), followed by the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(from) = self.transitions.first().and_then(|t| t.from.as_ref()) {
            path.push(from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Maximum number of transitions retained.
    pub fn limit(&self) -> usize {
        self.limit
    }
}
