//! Builder for constructing registries.

use crate::builder::error::BuildError;
use crate::core::DEFAULT_HISTORY_LIMIT;
use crate::fsm::{Registry, StateNode};

/// Builder for constructing registries with a fluent API.
///
/// States are registered in the order they were added, then the initial
/// state is entered, so the returned registry always has a current state.
///
/// # Example
///
/// ```rust
/// use recollect::builder::RegistryBuilder;
/// use recollect::progress::{Broadcasts, ProgressKey, ProgressNode};
///
/// let mut hooks = Broadcasts::default();
/// let registry = RegistryBuilder::new()
///     .state(ProgressKey::Start, ProgressNode::Start)
///     .state(ProgressKey::Memorize, ProgressNode::Memorize)
///     .initial(ProgressKey::Start)
///     .build(&mut hooks)
///     .unwrap();
///
/// assert_eq!(registry.current_key(), Some(&ProgressKey::Start));
/// ```
pub struct RegistryBuilder<N: StateNode> {
    initial: Option<N::Key>,
    states: Vec<(N::Key, N)>,
    history_limit: usize,
}

impl<N: StateNode> RegistryBuilder<N> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Add a state node under `key`.
    pub fn state(mut self, key: N::Key, node: N) -> Self {
        self.states.push((key, node));
        self
    }

    /// Add several states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = (N::Key, N)>) -> Self {
        self.states.extend(states);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, key: N::Key) -> Self {
        self.initial = Some(key);
        self
    }

    /// Number of transitions the registry's history keeps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the registry, entering the initial state against `ctx`.
    ///
    /// Returns an error if required fields are missing, a key was added
    /// twice, or the initial key was never added.
    pub fn build(self, ctx: &mut N::Context) -> Result<Registry<N>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut registry = Registry::with_history_limit(self.history_limit);
        for (key, node) in self.states {
            registry.add_state(key, node)?;
        }
        registry.set_current_state(initial, ctx)?;

        Ok(registry)
    }
}

impl<N: StateNode> Default for RegistryBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsm::FsmError;
    use crate::state_enum;

    state_enum! {
        enum Stage {
            Draft,
            Review,
            Published,
        }
        final: [Published]
    }

    struct Page(Stage);

    impl StateNode for Page {
        type Key = Stage;
        type Context = u32;

        fn on_entry(&mut self, entries: &mut u32) {
            *entries += 1;
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let mut entries = 0;
        let result = RegistryBuilder::<Page>::new()
            .state(Stage::Draft, Page(Stage::Draft))
            .build(&mut entries);
        assert_eq!(result.unwrap_err(), BuildError::MissingInitialState);

        let result = RegistryBuilder::<Page>::new()
            .initial(Stage::Draft)
            .build(&mut entries);
        assert_eq!(result.unwrap_err(), BuildError::NoStates);
        assert_eq!(entries, 0);
    }

    #[test]
    fn builder_enters_initial_state() {
        let mut entries = 0;
        let registry = RegistryBuilder::new()
            .states(Stage::ALL.iter().map(|&stage| (stage, Page(stage))))
            .initial(Stage::Review)
            .build(&mut entries)
            .unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.current_key(), Some(&Stage::Review));
        assert_eq!(registry.current_state().map(|p| p.0), Some(Stage::Review));
        assert_eq!(entries, 1);
    }

    #[test]
    fn builder_rejects_duplicate_states() {
        let mut entries = 0;
        let result = RegistryBuilder::new()
            .state(Stage::Draft, Page(Stage::Draft))
            .state(Stage::Draft, Page(Stage::Review))
            .initial(Stage::Draft)
            .build(&mut entries);

        assert_eq!(
            result.unwrap_err(),
            BuildError::Fsm(FsmError::DuplicateState {
                state: "Draft".to_string()
            })
        );
    }

    #[test]
    fn builder_rejects_unregistered_initial_state() {
        let mut entries = 0;
        let result = RegistryBuilder::new()
            .state(Stage::Draft, Page(Stage::Draft))
            .initial(Stage::Published)
            .build(&mut entries);

        assert!(matches!(
            result,
            Err(BuildError::Fsm(FsmError::UnknownState { .. }))
        ));
        assert_eq!(entries, 0);
    }

    #[test]
    fn builder_applies_history_limit() {
        let mut entries = 0;
        let registry = RegistryBuilder::new()
            .state(Stage::Draft, Page(Stage::Draft))
            .initial(Stage::Draft)
            .history_limit(4)
            .build(&mut entries)
            .unwrap();

        assert_eq!(registry.history().limit(), 4);
        assert_eq!(registry.history().len(), 1);
    }
}
