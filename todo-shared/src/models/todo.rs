use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Timestamp;

/// Display labels indexed by priority.
pub const PRIORITY_LABELS: [&str; 5] = ["Normal", "Low", "Medium", "High", "Top"];

/// Highest priority the API accepts.
pub const MAX_PRIORITY: u8 = 4;

/// Looks up the label for a raw priority value.
///
/// Anything outside `0..=4` falls back to `"Normal"`.
#[must_use]
pub fn priority_label(priority: i64) -> &'static str {
    usize::try_from(priority)
        .ok()
        .and_then(|index| PRIORITY_LABELS.get(index).copied())
        .unwrap_or(PRIORITY_LABELS[0])
}

/// A todo entry as returned by `GET /todos/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRecord {
    /// Server assigned identifier.
    pub id: Uuid,

    /// Free-form task text.
    pub description: String,

    /// Priority index, nominally `0..=4`.
    #[serde(default)]
    pub priority: i64,

    /// Optional deadline.
    #[serde(default)]
    pub due_date: Option<Timestamp>,

    /// Whether the task has been completed.
    #[serde(default)]
    pub is_completed: bool,

    /// Server assigned completion instant.
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
}

/// Request body for `POST /todos/`.
///
/// `due_date` is omitted from the JSON entirely when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodoRequest {
    /// Task text.
    pub description: String,

    /// Priority index in `0..=4`.
    pub priority: u8,

    /// Optional deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
}

impl CreateTodoRequest {
    /// Builds a request, clamping the priority into the accepted range.
    pub fn new(description: impl Into<String>, priority: u8, due_date: Option<Timestamp>) -> Self {
        Self {
            description: description.into(),
            priority: priority.min(MAX_PRIORITY),
            due_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_priority_label_lookup() {
        assert_eq!(priority_label(0), "Normal");
        assert_eq!(priority_label(1), "Low");
        assert_eq!(priority_label(2), "Medium");
        assert_eq!(priority_label(3), "High");
        assert_eq!(priority_label(4), "Top");
    }

    #[test]
    fn test_priority_label_out_of_range_falls_back() {
        assert_eq!(priority_label(5), "Normal");
        assert_eq!(priority_label(-1), "Normal");
        assert_eq!(priority_label(i64::MAX), "Normal");
    }

    #[test]
    fn test_todo_record_deserialization() {
        let json = r#"{
            "id": "9b2f3c1e-7d44-4c1a-8f0e-2a6f1c9d7e55",
            "description": "Buy milk",
            "priority": 2,
            "due_date": "2025-03-08T14:30:00",
            "is_completed": true,
            "completed_at": "2025-03-08T15:00:00Z",
            "user_id": "5b0b8c9e-5f1e-4a4e-9a43-3b1b6f6f2a10"
        }"#;
        let todo: TodoRecord = serde_json::from_str(json).unwrap();

        assert_eq!(todo.description, "Buy milk");
        assert_eq!(todo.priority, 2);
        assert!(todo.is_completed);
        assert_eq!(
            todo.due_date,
            Some(Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap()))
        );
        assert!(todo.completed_at.is_some());
    }

    #[test]
    fn test_todo_record_requires_id() {
        let json = r#"{"description":"Buy milk","priority":2}"#;
        assert!(serde_json::from_str::<TodoRecord>(json).is_err());
    }

    #[test]
    fn test_create_request_omits_missing_due_date() {
        let request = CreateTodoRequest::new("Buy milk", 2, None);
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(json, r#"{"description":"Buy milk","priority":2}"#);
    }

    #[test]
    fn test_create_request_includes_due_date() {
        let due = Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap());
        let value = serde_json::to_value(CreateTodoRequest::new("File taxes", 4, Some(due))).unwrap();

        assert_eq!(value["due_date"], "2025-03-08T14:30:00Z");
    }

    #[test]
    fn test_create_request_clamps_priority() {
        assert_eq!(CreateTodoRequest::new("x", 9, None).priority, MAX_PRIORITY);
    }
}
