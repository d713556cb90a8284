//! Errors raised while building definitions or constructing instances.

use thiserror::Error;

/// A machine declaration, or an instance's overrides, broke an invariant.
///
/// These errors are not recoverable for the attempt that raised them: the
/// declaration or the overrides must be fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("Event '{event}' has no source states")]
    EmptySources { event: String },

    #[error("Event '{event}' is declared more than once")]
    DuplicateEvent { event: String },

    #[error("Initial state '{state}' is not a state of this machine")]
    UnknownInitialState { state: String },

    #[error("Accepting state '{state}' is not a state of this machine")]
    UnknownAcceptingState { state: String },

    #[error("State graph is not connected ({components} disjoint components)")]
    Disconnected { components: usize },

    #[error("No initial state given and the machine declares no default")]
    MissingInitialState,
}
