//! Execution events emitted while an agent acts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    System,
    User,
    Planner,
    Navigator,
}

/// Lifecycle phase of the reported operation.
///
/// For one logical action, `ActStart` always precedes exactly one of
/// `ActOk` or `ActFail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionState {
    #[serde(rename = "act.start")]
    ActStart,
    #[serde(rename = "act.ok")]
    ActOk,
    #[serde(rename = "act.fail")]
    ActFail,
}

impl ExecutionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::ActStart)
    }
}

/// Event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    pub task_id: String,
    /// Zero-based step number.
    pub step: u32,
    pub max_steps: u32,
    pub details: String,
}

/// An observational event. Nothing in the action core reads these back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEvent {
    pub actor: Actor,
    pub state: ExecutionState,
    pub data: EventData,
    pub timestamp: DateTime<Utc>,
}

impl AgentEvent {
    pub fn new(actor: Actor, state: ExecutionState, data: EventData) -> Self {
        Self {
            actor,
            state,
            data,
            timestamp: Utc::now(),
        }
    }

    pub fn details(&self) -> &str {
        &self.data.details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(details: &str) -> EventData {
        EventData {
            task_id: "task-1".to_string(),
            step: 0,
            max_steps: 10,
            details: details.to_string(),
        }
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_string(&ExecutionState::ActFail).unwrap();
        assert_eq!(json, "\"act.fail\"");
    }

    #[test]
    fn test_actor_serialization() {
        let json = serde_json::to_string(&Actor::Navigator).unwrap();
        assert_eq!(json, "\"navigator\"");
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ExecutionState::ActStart.is_terminal());
        assert!(ExecutionState::ActOk.is_terminal());
        assert!(ExecutionState::ActFail.is_terminal());
    }

    #[test]
    fn test_event_details() {
        let event = AgentEvent::new(Actor::Navigator, ExecutionState::ActOk, data("clicked"));
        assert_eq!(event.details(), "clicked");
        assert_eq!(event.data.task_id, "task-1");
    }
}
