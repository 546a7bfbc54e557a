//! Core State trait for state machine keys.
//!
//! Every state a registry can hold is identified by a value implementing
//! this trait. Keys are small, closed sets of identifiers; the methods here
//! only inspect them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine state keys.
///
/// All methods are pure - no side effects. A key names a state; the
/// behaviour attached to it lives in a [`StateNode`](crate::fsm::StateNode).
///
/// # Required Traits
///
/// - `Clone`: keys are copied into history records and errors
/// - `Eq` + `Hash`: keys index the registry
/// - `Debug`: keys must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: history can be exported
///
/// # Example
///
/// ```rust
/// use recollect::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Broken,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// A registry whose current state is final ignores triggers.
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Door {
        Open,
        Closed,
        Broken,
    }

    impl State for Door {
        fn name(&self) -> &str {
            match self {
                Self::Open => "Open",
                Self::Closed => "Closed",
                Self::Broken => "Broken",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(Door::Open.name(), "Open");
        assert_eq!(Door::Closed.name(), "Closed");
        assert_eq!(Door::Broken.name(), "Broken");
    }

    #[test]
    fn final_flag() {
        assert!(!Door::Open.is_final());
        assert!(!Door::Closed.is_final());
        assert!(Door::Broken.is_final());
    }

    #[test]
    fn keys_hash_by_identity() {
        let keys: HashSet<Door> = [Door::Open, Door::Closed, Door::Open].into_iter().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&Door::Open));
        assert!(!keys.contains(&Door::Broken));
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&Door::Closed).unwrap();
        let deserialized: Door = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Door::Closed);
    }
}
