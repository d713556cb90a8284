//! Core machine model.
//!
//! This module contains the immutable data a machine is made of:
//! - State identifiers via the `State` newtype
//! - Named transition rules via `Event`
//! - The compiled `MachineDefinition`
//! - The disjoint-set connectivity check used when building definitions
//!
//! Nothing in this module mutates after construction.

mod components;
mod definition;
mod event;
mod state;

pub use components::{connected_components, DisjointSet};
pub use definition::MachineDefinition;
pub use event::Event;
pub use state::State;
