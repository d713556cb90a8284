//! Automaton: validated finite-state machines
//!
//! A machine is declared as a set of named events, each moving one or more
//! source states to a single destination state. Declarations are validated
//! and compiled once into an immutable definition; instances are then driven
//! through that definition one event at a time.
//!
//! # Core Concepts
//!
//! - **State**: A named node; the state set is derived from the events
//! - **Event**: A named rule from a set of source states to a destination
//! - **Definition**: The checked, immutable machine shared by all instances
//! - **Instance**: A current-state pointer moved only by successful dispatch
//!
//! Building a definition rejects unknown default initial or accepting states
//! and state graphs that split into disconnected clusters. Dispatching an
//! event either moves the instance or fails without touching it.
//!
//! # Example
//!
//! ```rust
//! use automaton::{DefinitionBuilder, InvalidTransitionError, MachineInstance};
//!
//! let definition = DefinitionBuilder::new()
//!     .event("go", "red", "green")
//!     .event("slowdown", "green", "yellow")
//!     .event("stop", "yellow", "red")
//!     .initial_state("red")
//!     .accepting_states(["red", "green"])
//!     .build()
//!     .unwrap();
//!
//! let mut crossroads = MachineInstance::new(definition).unwrap();
//! assert!(crossroads.is_accepted());
//!
//! crossroads.dispatch("go").unwrap();
//! crossroads.dispatch("slowdown").unwrap();
//! assert!(!crossroads.is_accepted());
//!
//! crossroads.dispatch("stop").unwrap();
//! assert_eq!(crossroads.state(), "red");
//!
//! let error = crossroads.dispatch("stop").unwrap_err();
//! assert!(matches!(error, InvalidTransitionError::NotValidFromState { .. }));
//! assert_eq!(crossroads.state(), "red");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod runtime;

// Re-export commonly used types
pub use builder::{build_definition, DefinitionBuilder, DefinitionError, MachineDeclaration};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{Event, MachineDefinition, State};
pub use runtime::{new_instance, InvalidTransitionError, MachineInstance, Transition};
