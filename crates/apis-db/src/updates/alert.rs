//! Alert update builder.

use apis_core::enums::{AlertSeverity, AlertType};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<AlertType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<AlertSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hive_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissed: Option<bool>,
}

pub struct AlertUpdateBuilder(AlertUpdate);

impl AlertUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AlertUpdate::default())
    }

    #[must_use]
    pub fn alert_type(mut self, alert_type: AlertType) -> Self {
        self.0.alert_type = Some(alert_type);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.0.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.0.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn hive_ids(mut self, hive_ids: Vec<String>) -> Self {
        self.0.hive_ids = Some(hive_ids);
        self
    }

    #[must_use]
    pub fn dismissed(mut self, dismissed: bool) -> Self {
        self.0.dismissed = Some(dismissed);
        self
    }

    #[must_use]
    pub fn build(self) -> AlertUpdate {
        self.0
    }
}

impl Default for AlertUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
