//! State identifiers.
//!
//! States have no behaviour of their own. A state exists only because some
//! event names it as a source or destination.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a state in a machine.
///
/// `State` borrows as `str`, so sets of states can be queried with plain
/// string slices.
///
/// # Example
///
/// ```rust
/// use automaton::core::State;
/// use std::collections::BTreeSet;
///
/// let states: BTreeSet<State> = ["red", "green"].into_iter().map(State::from).collect();
/// assert!(states.contains("red"));
/// assert_eq!(State::new("red").as_str(), "red");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&State> for State {
    fn from(state: &State) -> Self {
        state.clone()
    }
}

impl PartialEq<str> for State {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for State {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn state_displays_its_name() {
        assert_eq!(State::new("yellow").to_string(), "yellow");
    }

    #[test]
    fn state_compares_with_str() {
        let state = State::from("red");
        assert_eq!(state, "red");
        assert_ne!(state, "green");
    }

    #[test]
    fn state_set_lookup_by_str() {
        let states: BTreeSet<State> = ["a", "b"].into_iter().map(State::from).collect();
        assert!(states.contains("a"));
        assert!(!states.contains("c"));
    }

    #[test]
    fn state_serializes_as_plain_string() {
        let json = serde_json::to_string(&State::new("sink")).unwrap();
        assert_eq!(json, "\"sink\"");

        let state: State = serde_json::from_str("\"sink\"").unwrap();
        assert_eq!(state, "sink");
    }
}
