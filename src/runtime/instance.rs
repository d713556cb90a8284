//! Machine instances: a current-state pointer into a shared definition.

use crate::builder::machine::validate_accepting;
use crate::builder::DefinitionError;
use crate::core::{Event, MachineDefinition, State};
use crate::runtime::error::InvalidTransitionError;
use crate::runtime::transition::Transition;
use std::collections::BTreeSet;
use std::sync::Arc;

/// A live instance of a machine.
///
/// The current state is the only thing that changes, and only
/// [`dispatch`](Self::dispatch) changes it. Dispatch takes `&mut self`, so
/// sharing one instance across threads needs a lock around it; the
/// definition itself is shared freely.
///
/// # Example
///
/// ```rust
/// use automaton::builder::DefinitionBuilder;
/// use automaton::runtime::MachineInstance;
///
/// let definition = DefinitionBuilder::new()
///     .event("go", "red", "green")
///     .event("stop", "green", "red")
///     .initial_state("red")
///     .accepting_states(["red"])
///     .build()
///     .unwrap();
///
/// let mut light = MachineInstance::new(definition).unwrap();
/// assert!(light.is_accepted());
///
/// light.dispatch("go").unwrap();
/// assert_eq!(light.state(), "green");
/// assert!(!light.is_accepted());
///
/// assert!(light.dispatch("go").is_err());
/// assert_eq!(light.state(), "green");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineInstance {
    definition: Arc<MachineDefinition>,
    current: State,
    accepting: BTreeSet<State>,
}

impl MachineInstance {
    /// Create an instance using the definition's defaults.
    pub fn new(definition: Arc<MachineDefinition>) -> Result<Self, DefinitionError> {
        InstanceBuilder::new(definition).build()
    }

    /// Start building an instance with per-instance overrides.
    pub fn builder(definition: Arc<MachineDefinition>) -> InstanceBuilder {
        InstanceBuilder::new(definition)
    }

    /// Get current state (pure)
    pub fn state(&self) -> &State {
        &self.current
    }

    /// Accepting states of this instance, fixed at construction.
    pub fn accepting_states(&self) -> &BTreeSet<State> {
        &self.accepting
    }

    pub fn definition(&self) -> &Arc<MachineDefinition> {
        &self.definition
    }

    /// Check if the current state is an accepting state (pure)
    pub fn is_accepted(&self) -> bool {
        self.accepting.contains(&self.current)
    }

    /// Check if `event` would be accepted from the current state (pure)
    pub fn can_dispatch(&self, event: &str) -> bool {
        self.applicable(event).is_ok()
    }

    /// Events that may fire from the current state, in name order.
    pub fn available_events(&self) -> Vec<&str> {
        self.definition
            .events()
            .values()
            .filter(|e| e.is_valid_from(self.current.as_str()))
            .map(Event::name)
            .collect()
    }

    fn applicable(&self, event: &str) -> Result<&Event, InvalidTransitionError> {
        let rule = self
            .definition
            .event(event)
            .ok_or_else(|| InvalidTransitionError::UnknownEvent {
                event: event.to_string(),
            })?;

        if !rule.is_valid_from(self.current.as_str()) {
            return Err(InvalidTransitionError::NotValidFromState {
                event: event.to_string(),
                state: self.current.to_string(),
            });
        }

        Ok(rule)
    }

    /// Fire `event`.
    ///
    /// On success the instance moves to the event's destination and the move
    /// is returned. On failure the instance is unchanged.
    pub fn dispatch(&mut self, event: &str) -> Result<Transition, InvalidTransitionError> {
        let to = match self.applicable(event) {
            Ok(rule) => rule.destination().clone(),
            Err(e) => {
                tracing::debug!(state = %self.current, error = %e, "event rejected");
                return Err(e);
            }
        };

        let from = std::mem::replace(&mut self.current, to.clone());
        tracing::trace!(event = event, from = %from, to = %to, "event dispatched");

        Ok(Transition {
            event: event.to_string(),
            from,
            to,
        })
    }
}

/// Builder for machine instances.
///
/// Without overrides the instance starts in the definition's default initial
/// state and uses its default accepting states. Overrides are validated
/// against the definition's states; a default and an override are
/// independent of each other.
#[derive(Clone, Debug)]
pub struct InstanceBuilder {
    definition: Arc<MachineDefinition>,
    initial: Option<State>,
    accepting: Option<Vec<State>>,
}

impl InstanceBuilder {
    pub fn new(definition: Arc<MachineDefinition>) -> Self {
        Self {
            definition,
            initial: None,
            accepting: None,
        }
    }

    /// Override the initial state.
    pub fn initial_state(mut self, state: impl Into<State>) -> Self {
        self.initial = Some(state.into());
        self
    }

    pub fn maybe_initial_state(mut self, state: Option<State>) -> Self {
        self.initial = state;
        self
    }

    /// Override the accepting states.
    pub fn accepting_states<S: Into<State>>(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting = Some(states.into_iter().map(Into::into).collect());
        self
    }

    pub fn maybe_accepting_states(mut self, states: Option<Vec<State>>) -> Self {
        self.accepting = states;
        self
    }

    /// Build the instance.
    pub fn build(self) -> Result<MachineInstance, DefinitionError> {
        let current = match self.initial {
            Some(state) if self.definition.has_state(state.as_str()) => state,
            Some(state) => {
                return Err(DefinitionError::UnknownInitialState {
                    state: state.to_string(),
                })
            }
            None => self
                .definition
                .default_initial_state()
                .cloned()
                .ok_or(DefinitionError::MissingInitialState)?,
        };

        let accepting = match self.accepting {
            Some(states) => validate_accepting(self.definition.states(), states)?,
            None => self.definition.default_accepting_states().clone(),
        };

        tracing::debug!(initial = %current, "created machine instance");

        Ok(MachineInstance {
            definition: self.definition,
            current,
            accepting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DefinitionBuilder;

    fn traffic_light() -> Arc<MachineDefinition> {
        DefinitionBuilder::new()
            .event("go", "red", "green")
            .event("slowdown", "green", "yellow")
            .event("stop", "yellow", "red")
            .initial_state("red")
            .accepting_states(["red", "green"])
            .build()
            .unwrap()
    }

    fn no_default() -> Arc<MachineDefinition> {
        DefinitionBuilder::new()
            .event("event1", "state_a", "state_b")
            .event("event2", "state_b", "state_c")
            .build()
            .unwrap()
    }

    #[test]
    fn starts_in_default_initial_state() {
        let instance = MachineInstance::new(traffic_light()).unwrap();
        assert_eq!(instance.state(), "red");
        assert!(instance.is_accepted());
    }

    #[test]
    fn missing_initial_state_rejected() {
        let result = MachineInstance::new(no_default());
        assert_eq!(result.unwrap_err(), DefinitionError::MissingInitialState);
    }

    #[test]
    fn unknown_explicit_initial_state_rejected() {
        let result = MachineInstance::builder(no_default())
            .initial_state("unknown")
            .build();
        assert!(matches!(
            result,
            Err(DefinitionError::UnknownInitialState { .. })
        ));
    }

    #[test]
    fn explicit_initial_state_without_default() {
        for state in ["state_a", "state_b", "state_c"] {
            let instance = MachineInstance::builder(no_default())
                .initial_state(state)
                .build()
                .unwrap();
            assert_eq!(instance.state(), state);
            assert!(instance.definition().default_initial_state().is_none());
        }
    }

    #[test]
    fn explicit_initial_state_overrides_default() {
        let instance = MachineInstance::builder(traffic_light())
            .initial_state("yellow")
            .build()
            .unwrap();
        assert_eq!(instance.state(), "yellow");
        assert!(!instance.is_accepted());
    }

    #[test]
    fn custom_accepting_states_replace_defaults() {
        let instance = MachineInstance::builder(traffic_light())
            .accepting_states(["yellow"])
            .build()
            .unwrap();

        assert!(!instance.is_accepted());
        assert_eq!(instance.accepting_states().len(), 1);
    }

    #[test]
    fn unknown_custom_accepting_state_rejected() {
        let result = MachineInstance::builder(traffic_light())
            .accepting_states(["yellow", "unknown"])
            .build();

        assert_eq!(
            result.unwrap_err(),
            DefinitionError::UnknownAcceptingState {
                state: "unknown".to_string()
            }
        );
    }

    #[test]
    fn dispatch_moves_to_destination() {
        let mut instance = MachineInstance::new(traffic_light()).unwrap();
        let transition = instance.dispatch("go").unwrap();

        assert_eq!(transition.from, "red");
        assert_eq!(transition.to, "green");
        assert_eq!(instance.state(), "green");
    }

    #[test]
    fn rejected_dispatch_leaves_instance_unchanged() {
        let mut instance = MachineInstance::new(traffic_light()).unwrap();
        let before = instance.clone();

        let error = instance.dispatch("stop").unwrap_err();
        assert_eq!(
            error,
            InvalidTransitionError::NotValidFromState {
                event: "stop".to_string(),
                state: "red".to_string(),
            }
        );
        assert_eq!(instance, before);

        let error = instance.dispatch("unknown").unwrap_err();
        assert_eq!(error.event(), "unknown");
        assert!(matches!(error, InvalidTransitionError::UnknownEvent { .. }));
        assert_eq!(instance, before);
    }

    #[test]
    fn available_events_follow_current_state() {
        let mut instance = MachineInstance::new(traffic_light()).unwrap();
        assert_eq!(instance.available_events(), vec!["go"]);
        assert!(instance.can_dispatch("go"));
        assert!(!instance.can_dispatch("stop"));

        instance.dispatch("go").unwrap();
        assert_eq!(instance.available_events(), vec!["slowdown"]);
    }

    #[test]
    fn empty_machine_cannot_be_instantiated() {
        let empty = DefinitionBuilder::new().build().unwrap();

        assert_eq!(
            MachineInstance::new(empty.clone()).unwrap_err(),
            DefinitionError::MissingInitialState
        );
        assert!(matches!(
            MachineInstance::builder(empty).initial_state("anything").build(),
            Err(DefinitionError::UnknownInitialState { .. })
        ));
    }

    #[test]
    fn instances_share_one_definition() {
        let definition = traffic_light();
        let mut first = MachineInstance::new(Arc::clone(&definition)).unwrap();
        let second = MachineInstance::new(Arc::clone(&definition)).unwrap();

        first.dispatch("go").unwrap();
        assert_eq!(first.state(), "green");
        assert_eq!(second.state(), "red");
        assert!(Arc::ptr_eq(first.definition(), second.definition()));
    }
}
