//! Events: named transition rules.

use super::state::State;
use std::collections::BTreeSet;

/// A named rule moving any of `sources` to `destination`.
///
/// Events are created by the builder and owned by a
/// [`MachineDefinition`](super::MachineDefinition); they never change after
/// the definition is built. Several events may share the same shape.
///
/// Events only come out of the builder, so an event with no sources cannot
/// be constructed from outside, not even by deserializing one:
///
/// ```compile_fail
/// let event: automaton::Event =
///     serde_json::from_str(r#"{"name": "go", "sources": [], "destination": "b"}"#).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    name: String,
    sources: BTreeSet<State>,
    destination: State,
}

impl Event {
    pub(crate) fn new(name: String, sources: BTreeSet<State>, destination: State) -> Self {
        Self {
            name,
            sources,
            destination,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// States from which this event may fire. Never empty.
    pub fn sources(&self) -> &BTreeSet<State> {
        &self.sources
    }

    pub fn destination(&self) -> &State {
        &self.destination
    }

    /// Check if the event may fire while the machine is in `state` (pure).
    pub fn is_valid_from(&self, state: &str) -> bool {
        self.sources.contains(state)
    }

    /// True when the destination is also one of the sources.
    pub fn is_self_loop(&self) -> bool {
        self.sources.contains(&self.destination)
    }

    /// Undirected edges contributed by this event, one per source.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (&State, &State)> + '_ {
        self.sources.iter().map(move |s| (s, &self.destination))
    }
}
