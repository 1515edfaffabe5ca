//! Creation payloads for stored entities.
//!
//! Each `New*` struct carries the caller-supplied fields of an entity. The
//! store assigns the id and timestamps. `validate()` rejects content the store
//! must never persist.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{
    AlertSeverity, AlertType, ApiaryStatus, BroodPattern, ColonyPopulation, ColonyStrength,
    ColonyTemperament, HealthStatus, HiveStatus, HiveTemperament, HoneyStores, Priority,
    QueenCellStatus, QueenStatus, RecommendationType, ResourceLevel, TaskPriority, TaskType,
};
use crate::errors::CoreError;

fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewApiary {
    pub name: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: ApiaryStatus,
}

impl NewApiary {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty name or location, or a
    /// coordinate outside the valid range.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("location", &self.location)?;
        if let Some(lat) = self.latitude.filter(|lat| !(-90.0..=90.0).contains(lat)) {
            return Err(CoreError::Validation(format!(
                "latitude {lat} is outside -90..=90"
            )));
        }
        if let Some(lon) = self.longitude.filter(|lon| !(-180.0..=180.0).contains(lon)) {
            return Err(CoreError::Validation(format!(
                "longitude {lon} is outside -180..=180"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewHive {
    pub name: String,
    pub apiary_id: String,
    pub status: HiveStatus,
    pub image_url: Option<String>,
    pub colony_strength: ColonyStrength,
    pub queen_status: QueenStatus,
    pub temperament: HiveTemperament,
    pub honey_stores: HoneyStores,
}

impl NewHive {
    /// A hive with neutral defaults for everything but its name and apiary.
    #[must_use]
    pub fn named(name: &str, apiary_id: &str) -> Self {
        Self {
            name: name.to_string(),
            apiary_id: apiary_id.to_string(),
            status: HiveStatus::Strong,
            image_url: None,
            colony_strength: ColonyStrength::Moderate,
            queen_status: QueenStatus::Unknown,
            temperament: HiveTemperament::Calm,
            honey_stores: HoneyStores::Adequate,
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty name or apiary id.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("apiaryId", &self.apiary_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewInspection {
    pub hive_id: String,
    pub user_id: String,
    pub inspection_date: DateTime<Utc>,
    pub duration_minutes: Option<u32>,
    pub queen_seen: bool,
    pub queen_marked: bool,
    pub queen_cells: QueenCellStatus,
    pub brood_pattern: BroodPattern,
    pub temperament: ColonyTemperament,
    pub population: ColonyPopulation,
    pub health_status: HealthStatus,
    pub varroa_mites_detected: bool,
    pub disease_detected: bool,
    pub disease_description: Option<String>,
    pub pests_notes: Option<String>,
    pub honey_stores: ResourceLevel,
    pub pollen_stores: ResourceLevel,
    pub notes: Option<String>,
    pub next_inspection_date: Option<DateTime<Utc>>,
}

impl NewInspection {
    /// An uneventful inspection: queen seen, healthy colony, adequate stores.
    #[must_use]
    pub fn routine(hive_id: &str, user_id: &str, inspection_date: DateTime<Utc>) -> Self {
        Self {
            hive_id: hive_id.to_string(),
            user_id: user_id.to_string(),
            inspection_date,
            duration_minutes: None,
            queen_seen: true,
            queen_marked: false,
            queen_cells: QueenCellStatus::None,
            brood_pattern: BroodPattern::Good,
            temperament: ColonyTemperament::Calm,
            population: ColonyPopulation::Medium,
            health_status: HealthStatus::Healthy,
            varroa_mites_detected: false,
            disease_detected: false,
            disease_description: None,
            pests_notes: None,
            honey_stores: ResourceLevel::Adequate,
            pollen_stores: ResourceLevel::Adequate,
            notes: None,
            next_inspection_date: None,
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for missing references, or a disease
    /// description recorded without `disease_detected`.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("hiveId", &self.hive_id)?;
        require_non_empty("userId", &self.user_id)?;
        if !self.disease_detected && self.disease_description.is_some() {
            return Err(CoreError::Validation(
                "diseaseDescription requires diseaseDetected".into(),
            ));
        }
        if self
            .next_inspection_date
            .is_some_and(|next| next < self.inspection_date)
        {
            return Err(CoreError::Validation(
                "nextInspectionDate is before inspectionDate".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub due_date: DateTime<Utc>,
    pub reminder_date: Option<DateTime<Utc>>,
    pub hive_id: Option<String>,
    pub apiary_id: Option<String>,
    pub user_id: String,
    pub priority: TaskPriority,
    pub notes: Option<String>,
}

impl NewTask {
    /// A general, medium-priority task with no hive or apiary.
    #[must_use]
    pub fn new(title: &str, user_id: &str, due_date: DateTime<Utc>) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            task_type: TaskType::General,
            due_date,
            reminder_date: None,
            hive_id: None,
            apiary_id: None,
            user_id: user_id.to_string(),
            priority: TaskPriority::Medium,
            notes: None,
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty title or user, or a
    /// reminder scheduled after the due date.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("userId", &self.user_id)?;
        if self.reminder_date.is_some_and(|reminder| reminder > self.due_date) {
            return Err(CoreError::Validation(
                "reminderDate is after dueDate".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    #[serde(default)]
    pub hive_ids: Vec<String>,
}

impl NewAlert {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty title or message, or a
    /// blank hive id.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("message", &self.message)?;
        if self.hive_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(CoreError::Validation("hiveIds contains an empty id".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub hive_id: String,
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl NewRecommendation {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty hive, title, or description.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("hiveId", &self.hive_id)?;
        require_non_empty("title", &self.title)?;
        require_non_empty("description", &self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn apiary_rejects_bad_coordinates() {
        let mut apiary = NewApiary {
            name: "Home yard".into(),
            location: "Back garden".into(),
            latitude: Some(51.5),
            longitude: Some(-0.12),
            status: ApiaryStatus::Healthy,
        };
        assert!(apiary.validate().is_ok());

        apiary.latitude = Some(91.0);
        assert!(matches!(apiary.validate(), Err(CoreError::Validation(_))));

        apiary.latitude = None;
        apiary.longitude = Some(-181.0);
        assert!(matches!(apiary.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(NewHive::named("  ", "api-00000000").validate().is_err());
        assert!(NewHive::named("Hive 1", "").validate().is_err());
        assert!(NewHive::named("Hive 1", "api-00000000").validate().is_ok());
    }

    #[test]
    fn disease_description_needs_flag() {
        let mut inspection = NewInspection::routine("hiv-1", "usr-1", Utc::now());
        inspection.disease_description = Some("chalkbrood".into());
        assert!(inspection.validate().is_err());

        inspection.disease_detected = true;
        assert!(inspection.validate().is_ok());
    }

    #[test]
    fn task_reminder_must_precede_due_date() {
        let due = Utc::now();
        let mut task = NewTask::new("Feed syrup", "usr-1", due);
        task.reminder_date = Some(due - Duration::days(1));
        assert!(task.validate().is_ok());

        task.reminder_date = Some(due + Duration::days(1));
        assert!(task.validate().is_err());
    }

    #[test]
    fn alert_rejects_blank_hive_id() {
        let alert = NewAlert {
            alert_type: AlertType::General,
            title: "Check".into(),
            message: "Look at the yard".into(),
            severity: AlertSeverity::Info,
            hive_ids: vec![String::new()],
        };
        assert!(alert.validate().is_err());
    }
}
