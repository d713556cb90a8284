//! Checkpoint and resume for machine instances.
//!
//! A checkpoint captures an instance's current state and accepting states so
//! it can be stored and later resumed against the same definition. The
//! definition itself is not part of the checkpoint; it is rebuilt from its
//! declaration. Resuming re-validates every state against that definition.

use crate::core::{MachineDefinition, State};
use crate::runtime::MachineInstance;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of one machine instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Current state of the instance
    pub current_state: State,

    /// Accepting states of the instance
    pub accepting_states: BTreeSet<State>,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a JSON checkpoint. The version is checked on resume, not here.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact bincode encoding.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

impl MachineInstance {
    /// Capture the instance (pure).
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            current_state: self.state().clone(),
            accepting_states: self.accepting_states().clone(),
        }
    }

    /// Recreate an instance from a checkpoint.
    ///
    /// Fails if the checkpoint format is unknown or if any of its states is
    /// not a state of `definition`.
    pub fn resume(
        definition: Arc<MachineDefinition>,
        checkpoint: &Checkpoint,
    ) -> Result<Self, CheckpointError> {
        checkpoint.check_version()?;

        let instance = MachineInstance::builder(definition)
            .initial_state(checkpoint.current_state.clone())
            .accepting_states(checkpoint.accepting_states.iter().cloned())
            .build()?;

        tracing::debug!(
            checkpoint = %checkpoint.id,
            state = %instance.state(),
            "resumed machine instance"
        );
        Ok(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{DefinitionBuilder, DefinitionError};

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

    #[test]
    fn checkpoint_captures_state() {
        let mut instance = MachineInstance::new(traffic_light()).unwrap();
        instance.dispatch("go").unwrap();

        let checkpoint = instance.checkpoint();
        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.current_state, "green");
        assert_eq!(checkpoint.accepting_states.len(), 2);
        assert!(uuid::Uuid::parse_str(&checkpoint.id).is_ok());
    }

    #[test]
    fn checkpoint_ids_are_unique() {
        let instance = MachineInstance::new(traffic_light()).unwrap();
        assert_ne!(instance.checkpoint().id, instance.checkpoint().id);
    }

    #[test]
    fn resume_from_json() {
        let definition = traffic_light();
        let mut instance = MachineInstance::builder(Arc::clone(&definition))
            .accepting_states(["yellow"])
            .build()
            .unwrap();
        instance.dispatch("go").unwrap();
        instance.dispatch("slowdown").unwrap();

        let json = instance.checkpoint().to_json().unwrap();
        let restored = Checkpoint::from_json(&json).unwrap();
        let mut resumed = MachineInstance::resume(definition, &restored).unwrap();

        assert_eq!(resumed, instance);
        assert!(resumed.is_accepted());
        resumed.dispatch("stop").unwrap();
        assert_eq!(resumed.state(), "red");
    }

    #[test]
    fn resume_from_binary() {
        let definition = traffic_light();
        let instance = MachineInstance::new(Arc::clone(&definition)).unwrap();
        let checkpoint = instance.checkpoint();

        let bytes = checkpoint.to_binary().unwrap();
        let restored = Checkpoint::from_binary(&bytes).unwrap();
        assert_eq!(restored, checkpoint);

        let resumed = MachineInstance::resume(definition, &restored).unwrap();
        assert_eq!(resumed.state(), "red");
    }

    #[test]
    fn resume_rejects_unknown_version() {
        let instance = MachineInstance::new(traffic_light()).unwrap();
        let mut checkpoint = instance.checkpoint();
        checkpoint.version = CHECKPOINT_VERSION + 1;

        let result = MachineInstance::resume(traffic_light(), &checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn resume_rejects_foreign_state() {
        let instance = MachineInstance::new(traffic_light()).unwrap();
        let mut checkpoint = instance.checkpoint();
        checkpoint.current_state = State::from("blue");

        let result = MachineInstance::resume(traffic_light(), &checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::Definition(
                DefinitionError::UnknownInitialState { .. }
            ))
        ));
    }

    #[test]
    fn resume_rejects_foreign_accepting_state() {
        let instance = MachineInstance::new(traffic_light()).unwrap();
        let mut checkpoint = instance.checkpoint();
        checkpoint.accepting_states.insert(State::from("blue"));

        let result = MachineInstance::resume(traffic_light(), &checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::Definition(
                DefinitionError::UnknownAcceptingState { .. }
            ))
        ));
    }

    #[test]
    fn garbage_input_fails_to_decode() {
        assert!(matches!(
            Checkpoint::from_json("not json"),
            Err(CheckpointError::Json(_))
        ));
        assert!(matches!(
            Checkpoint::from_binary(&[0xff]),
            Err(CheckpointError::Binary(_))
        ));
    }

    #[test]
    fn codec_errors_name_the_format() {
        let json = Checkpoint::from_json(r#"{"version": 1}"#).unwrap_err();
        assert!(json.to_string().starts_with("checkpoint JSON error"));

        let instance = MachineInstance::new(traffic_light()).unwrap();
        let bytes = instance.checkpoint().to_binary().unwrap();
        let binary = Checkpoint::from_binary(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(binary.to_string().starts_with("checkpoint binary error"));
    }
}
