//! Errors raised when dispatching events.

use thiserror::Error;

/// An event could not be applied to an instance.
///
/// Recoverable: the instance is left untouched and another event may be tried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTransitionError {
    #[error("Unknown event '{event}'")]
    UnknownEvent { event: String },

    #[error("Event '{event}' is not valid from state '{state}'")]
    NotValidFromState { event: String, state: String },
}

impl InvalidTransitionError {
    /// Name of the event that was rejected.
    pub fn event(&self) -> &str {
        match self {
            Self::UnknownEvent { event } | Self::NotValidFromState { event, .. } => event,
        }
    }
}
