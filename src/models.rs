//! Data Models
//!
//! Wire shapes for the remote to-do service.

use serde::{Deserialize, Serialize, Serializer};

/// Every task created through this UI is a personal task.
pub const TASK_TYPE_PERSONAL: &str = "personal";

/// Task lifecycle stage, encoded on the wire as "1" | "2" | "3".
///
/// Anything else the server sends lands on `Unknown` instead of failing
/// the whole page deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Status {
    #[serde(rename = "1")]
    Open,
    #[serde(rename = "2")]
    InProgress,
    #[serde(rename = "3")]
    Completed,
    #[serde(other)]
    Unknown,
}

impl Status {
    /// Wire values the create form may submit. `""` (no selection) and
    /// anything out of range map to `None`.
    pub fn from_wire(value: &str) -> Option<Status> {
        match value {
            "1" => Some(Status::Open),
            "2" => Some(Status::InProgress),
            "3" => Some(Status::Completed),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Status::Open => "1",
            Status::InProgress => "2",
            Status::Completed => "3",
            Status::Unknown => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in progress",
            Status::Completed => "completed",
            Status::Unknown => "unknown",
        }
    }

    /// Badge background color for the status accent.
    pub fn badge_bg(&self) -> &'static str {
        match self {
            Status::Open | Status::Unknown => "#6c6b6c",
            Status::InProgress => "#b7ab11",
            Status::Completed => "#0d857a",
        }
    }
}

// Always serialize the wire encoding; `Unknown` has none and becomes
// the empty string rather than a variant name the server never defined.
impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

/// A to-do item as returned by the server.
///
/// The server sends more fields than these; extras are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: Status,
}

/// One page of tasks plus the total count across all pages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskPage {
    #[serde(rename = "data")]
    pub tasks: Vec<Task>,
    #[serde(rename = "totalTodos")]
    pub total_todos: u32,
}

/// List response body: `{ data: { data: [...], totalTodos: n } }`.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub data: TaskPage,
}

/// Create response body: `{ message: "..." }`.
#[derive(Debug, Deserialize)]
pub struct CreateResponse {
    pub message: String,
}

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub task_type: &'static str,
    pub status: Status,
}

impl NewTask {
    pub fn personal(name: String, description: String, status: Status) -> Self {
        Self {
            name,
            description,
            task_type: TASK_TYPE_PERSONAL,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_roundtrip() {
        assert_eq!(serde_json::from_str::<Status>("\"1\"").unwrap(), Status::Open);
        assert_eq!(serde_json::from_str::<Status>("\"2\"").unwrap(), Status::InProgress);
        assert_eq!(serde_json::from_str::<Status>("\"3\"").unwrap(), Status::Completed);
        assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"2\"");
    }

    #[test]
    fn out_of_range_status_falls_back_to_unknown() {
        assert_eq!(serde_json::from_str::<Status>("\"9\"").unwrap(), Status::Unknown);
        assert_eq!(Status::Unknown.label(), "unknown");
        assert_eq!(Status::Unknown.badge_bg(), Status::Open.badge_bg());
    }

    #[test]
    fn unknown_status_never_serializes_to_a_wire_value() {
        assert_eq!(serde_json::to_string(&Status::Unknown).unwrap(), "\"\"");
    }

    #[test]
    fn status_labels_are_total() {
        assert_eq!(Status::Open.label(), "open");
        assert_eq!(Status::InProgress.label(), "in progress");
        assert_eq!(Status::Completed.label(), "completed");
    }

    #[test]
    fn from_wire_accepts_only_valid_values() {
        assert_eq!(Status::from_wire("1"), Some(Status::Open));
        assert_eq!(Status::from_wire("3"), Some(Status::Completed));
        assert_eq!(Status::from_wire(""), None);
        assert_eq!(Status::from_wire("4"), None);
    }

    #[test]
    fn list_envelope_parses_nested_body() {
        // Last page of the 12-task / limit-5 scenario: 2 items remain.
        let body = r#"{
            "data": {
                "data": [
                    {"_id": "a1", "name": "Buy milk", "description": "2%", "status": "1", "createdAt": "2024-01-01"},
                    {"_id": "a2", "name": "Ship crate", "description": "v0.1", "status": "3", "__v": 0}
                ],
                "totalTodos": 12
            }
        }"#;
        let envelope: ListEnvelope = serde_json::from_str(body).unwrap();
        let page = envelope.data;
        assert_eq!(page.total_todos, 12);
        assert_eq!(page.tasks.len(), 2);
        assert_eq!(page.tasks[0].id, "a1");
        assert_eq!(page.tasks[0].status, Status::Open);
        assert_eq!(page.tasks[1].status, Status::Completed);
    }

    #[test]
    fn new_task_serializes_as_personal() {
        let draft = NewTask::personal("Buy milk".into(), "2%".into(), Status::Open);
        let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "personal");
        assert_eq!(json["status"], "1");
        assert_eq!(json["name"], "Buy milk");
        assert_eq!(json["description"], "2%");
    }
}
