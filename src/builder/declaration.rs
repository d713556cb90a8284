//! Declaration data: the raw description of a machine before validation.
//!
//! Declarations are plain serde values, so a machine can be written as JSON:
//!
//! ```json
//! {
//!   "initial": "red",
//!   "accepting": ["red", "green"],
//!   "events": [
//!     {"name": "go", "sources": "red", "destination": "green"},
//!     {"name": "slowdown", "sources": "green", "destination": "yellow"},
//!     {"name": "stop", "sources": ["yellow"], "destination": "red"}
//!   ]
//! }
//! ```

use super::error::DefinitionError;
use super::machine::DefinitionBuilder;
use crate::core::{MachineDefinition, State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Source states of one event: a single state or a collection of states.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sources(Vec<State>);

impl Sources {
    pub fn as_slice(&self) -> &[State] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_vec(self) -> Vec<State> {
        self.0
    }
}

impl From<State> for Sources {
    fn from(state: State) -> Self {
        Self(vec![state])
    }
}

impl From<&str> for Sources {
    fn from(state: &str) -> Self {
        Self(vec![State::from(state)])
    }
}

impl From<String> for Sources {
    fn from(state: String) -> Self {
        Self(vec![State::from(state)])
    }
}

impl<S: Into<State>> From<Vec<S>> for Sources {
    fn from(states: Vec<S>) -> Self {
        Self(states.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<State>, const N: usize> From<[S; N]> for Sources {
    fn from(states: [S; N]) -> Self {
        Self(states.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<State> for Sources {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Sources {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.0.as_slice() {
            [single] => single.serialize(serializer),
            many => many.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Sources {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct SourcesVisitor;

        impl<'de> Visitor<'de> for SourcesVisitor {
            type Value = Sources;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a state name or an array of state names")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Sources::from(v))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Sources::from(v))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut states = Vec::new();
                while let Some(state) = seq.next_element::<State>()? {
                    states.push(state);
                }
                Ok(Sources(states))
            }
        }

        deserializer.deserialize_any(SourcesVisitor)
    }
}

/// One declared event: `name` moves any of `sources` to `destination`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDeclaration {
    pub name: String,
    pub sources: Sources,
    pub destination: State,
}

impl EventDeclaration {
    pub fn new(
        name: impl Into<String>,
        sources: impl Into<Sources>,
        destination: impl Into<State>,
    ) -> Self {
        Self {
            name: name.into(),
            sources: sources.into(),
            destination: destination.into(),
        }
    }
}

/// Declaration data for a whole machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDeclaration {
    /// Default initial state for new instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<State>,

    /// Default accepting states.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accepting: Vec<State>,

    /// Events in declaration order.
    #[serde(default)]
    pub events: Vec<EventDeclaration>,
}

impl MachineDeclaration {
    /// Parse declaration data from JSON. Nothing is validated yet.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Validate and compile the declaration.
    pub fn build(&self) -> Result<Arc<MachineDefinition>, DefinitionError> {
        DefinitionBuilder::with_event_capacity(self.events.len())
            .events(self.events.iter().cloned())
            .maybe_initial_state(self.initial.clone())
            .accepting_states(self.accepting.iter().cloned())
            .build()
    }
}
