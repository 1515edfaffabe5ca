use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{TaskPriority, TaskStatus, TaskType};

/// A scheduled, user-owned work item, optionally tied to a hive or apiary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub due_date: DateTime<Utc>,
    pub reminder_date: Option<DateTime<Utc>>,
    pub hive_id: Option<String>,
    pub apiary_id: Option<String>,
    pub user_id: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub completed_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Pending and due strictly before `now`.
    #[must_use]
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.status == TaskStatus::Pending && self.due_date < now
    }
}
