use apis_core::entities::Alert;
use apis_core::enums::{AlertSeverity, AlertType};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An alert produced by a rule group, before it has an id or timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDraft {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub hive_ids: Vec<String>,
}

impl AlertDraft {
    /// A draft that applies generally (no hive association).
    pub fn general(
        alert_type: AlertType,
        severity: AlertSeverity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            alert_type,
            title: title.into(),
            message: message.into(),
            severity,
            hive_ids: Vec::new(),
        }
    }

    /// A draft about a single hive.
    pub fn for_hive(
        alert_type: AlertType,
        severity: AlertSeverity,
        hive_id: &str,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            hive_ids: vec![hive_id.to_string()],
            ..Self::general(alert_type, severity, title, message)
        }
    }

    /// Whether `alert` carries the same type, title, and hive ids.
    #[must_use]
    pub fn matches(&self, alert: &Alert) -> bool {
        self.alert_type == alert.alert_type
            && self.title == alert.title
            && self.hive_ids == alert.hive_ids
    }

    /// Materialize the draft. Generated alerts always start undismissed.
    #[must_use]
    pub fn into_alert(self, id: String, timestamp: DateTime<Utc>) -> Alert {
        Alert {
            id,
            alert_type: self.alert_type,
            title: self.title,
            message: self.message,
            severity: self.severity,
            timestamp,
            hive_ids: self.hive_ids,
            dismissed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_alert_is_never_dismissed() {
        let now = Utc::now();
        let alert = AlertDraft::for_hive(
            AlertType::Disease,
            AlertSeverity::Critical,
            "hiv-1",
            "Disease Detected",
            "Disease detected in Hive hiv-1: Unknown disease",
        )
        .into_alert("alr-00000001".into(), now);

        assert!(!alert.dismissed);
        assert_eq!(alert.timestamp, now);
        assert_eq!(alert.hive_ids, vec!["hiv-1".to_string()]);
    }

    #[test]
    fn matches_ignores_message_and_severity() {
        let draft = AlertDraft::general(
            AlertType::Task,
            AlertSeverity::Warning,
            "2 Overdue Tasks",
            "You have 2 overdue task(s). Oldest is 3 days overdue.",
        );
        let mut alert = draft.clone().into_alert("alr-1".into(), Utc::now());
        alert.message = "You have 2 overdue task(s). Oldest is 4 days overdue.".into();
        alert.severity = AlertSeverity::Critical;
        assert!(draft.matches(&alert));

        alert.hive_ids = vec!["hiv-1".into()];
        assert!(!draft.matches(&alert));
    }
}
