//! The asynchronous action record returned by mutating API calls.
//!
//! Mutating requests return an action that tracks server-side progress. The
//! client only carries the record; waiting for completion is up to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of an asynchronous remote action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    /// The action is still in progress
    Running,
    /// The action completed successfully
    Success,
    /// The action failed
    Error,
    /// The remote reported a status this client does not know
    #[default]
    #[serde(other)]
    Unknown,
}

impl ActionStatus {
    /// Returns true once the remote reports the action finished, in either outcome.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

/// Reference to a resource affected by an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResource {
    /// ID of the referenced resource
    #[serde(default)]
    pub id: i64,

    /// Type of the referenced resource (e.g. `server`)
    #[serde(default, rename = "type")]
    pub resource_type: String,
}

/// An asynchronous operation tracked by the remote API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// ID of the action
    #[serde(default)]
    pub id: i64,

    /// Command the action executes (e.g. `start_server`)
    #[serde(default)]
    pub command: String,

    /// Current status
    #[serde(default)]
    pub status: ActionStatus,

    /// Progress in percent
    #[serde(default)]
    pub progress: i64,

    /// Point in time when the action was started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<Utc>>,

    /// Point in time when the action finished, absent while running
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished: Option<DateTime<Utc>>,

    /// Resources the action operates on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ActionResource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTION_JSON: &str = r#"{
        "id": 13,
        "command": "start_server",
        "status": "running",
        "progress": 0,
        "started": "2016-01-30T23:50:00+00:00",
        "finished": null,
        "resources": [{"id": 42, "type": "server"}]
    }"#;

    #[test]
    fn deserialize_action() {
        let action: Action = serde_json::from_str(ACTION_JSON).unwrap();
        assert_eq!(action.id, 13);
        assert_eq!(action.command, "start_server");
        assert_eq!(action.status, ActionStatus::Running);
        assert_eq!(action.progress, 0);
        assert!(action.started.is_some());
        assert!(action.finished.is_none());
        assert_eq!(action.resources.len(), 1);
        assert_eq!(action.resources[0].id, 42);
        assert_eq!(action.resources[0].resource_type, "server");
    }

    #[test]
    fn action_round_trip() {
        let action: Action = serde_json::from_str(ACTION_JSON).unwrap();
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }

    #[test]
    fn unknown_status_falls_back() {
        let action: Action =
            serde_json::from_str(r#"{"id": 1, "status": "paused"}"#).unwrap();
        assert_eq!(action.status, ActionStatus::Unknown);
    }

    #[test]
    fn empty_object_yields_default() {
        let action: Action = serde_json::from_str("{}").unwrap();
        assert_eq!(action, Action::default());
        assert_eq!(action.status, ActionStatus::Unknown);
    }

    #[test]
    fn status_is_finished() {
        assert!(ActionStatus::Success.is_finished());
        assert!(ActionStatus::Error.is_finished());
        assert!(!ActionStatus::Running.is_finished());
        assert!(!ActionStatus::Unknown.is_finished());
    }
}
