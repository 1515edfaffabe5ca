use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AlertSeverity, AlertType};

/// A notification with a severity and an optional set of affected hives.
///
/// Alerts are either created by a user or generated by the advisor. An empty
/// `hive_ids` list means the alert applies generally.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub hive_ids: Vec<String>,
    #[serde(default)]
    pub dismissed: bool,
}

impl Alert {
    /// Whether the alert is still shown on the active path.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.dismissed
    }
}
