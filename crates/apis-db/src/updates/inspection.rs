//! Inspection update builder.
//!
//! The hive and the recording user are fixed at creation and cannot be changed.

use apis_core::enums::{
    BroodPattern, ColonyPopulation, ColonyTemperament, HealthStatus, QueenCellStatus,
    ResourceLevel,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct InspectionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queen_seen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queen_marked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queen_cells: Option<QueenCellStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brood_pattern: Option<BroodPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperament: Option<ColonyTemperament>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<ColonyPopulation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<HealthStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub varroa_mites_detected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_detected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pests_notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honey_stores: Option<ResourceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pollen_stores: Option<ResourceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_inspection_date: Option<Option<DateTime<Utc>>>,
}

pub struct InspectionUpdateBuilder(InspectionUpdate);

impl InspectionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(InspectionUpdate::default())
    }

    #[must_use]
    pub fn inspection_date(mut self, inspection_date: DateTime<Utc>) -> Self {
        self.0.inspection_date = Some(inspection_date);
        self
    }

    #[must_use]
    pub fn duration_minutes(mut self, duration_minutes: Option<u32>) -> Self {
        self.0.duration_minutes = Some(duration_minutes);
        self
    }

    #[must_use]
    pub fn queen_seen(mut self, queen_seen: bool) -> Self {
        self.0.queen_seen = Some(queen_seen);
        self
    }

    #[must_use]
    pub fn queen_marked(mut self, queen_marked: bool) -> Self {
        self.0.queen_marked = Some(queen_marked);
        self
    }

    #[must_use]
    pub fn queen_cells(mut self, queen_cells: QueenCellStatus) -> Self {
        self.0.queen_cells = Some(queen_cells);
        self
    }

    #[must_use]
    pub fn brood_pattern(mut self, brood_pattern: BroodPattern) -> Self {
        self.0.brood_pattern = Some(brood_pattern);
        self
    }

    #[must_use]
    pub fn temperament(mut self, temperament: ColonyTemperament) -> Self {
        self.0.temperament = Some(temperament);
        self
    }

    #[must_use]
    pub fn population(mut self, population: ColonyPopulation) -> Self {
        self.0.population = Some(population);
        self
    }

    #[must_use]
    pub fn health_status(mut self, health_status: HealthStatus) -> Self {
        self.0.health_status = Some(health_status);
        self
    }

    #[must_use]
    pub fn varroa_mites_detected(mut self, detected: bool) -> Self {
        self.0.varroa_mites_detected = Some(detected);
        self
    }

    #[must_use]
    pub fn disease_detected(mut self, detected: bool) -> Self {
        self.0.disease_detected = Some(detected);
        self
    }

    #[must_use]
    pub fn disease_description(mut self, description: Option<String>) -> Self {
        self.0.disease_description = Some(description);
        self
    }

    #[must_use]
    pub fn pests_notes(mut self, pests_notes: Option<String>) -> Self {
        self.0.pests_notes = Some(pests_notes);
        self
    }

    #[must_use]
    pub fn honey_stores(mut self, honey_stores: ResourceLevel) -> Self {
        self.0.honey_stores = Some(honey_stores);
        self
    }

    #[must_use]
    pub fn pollen_stores(mut self, pollen_stores: ResourceLevel) -> Self {
        self.0.pollen_stores = Some(pollen_stores);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn next_inspection_date(mut self, next: Option<DateTime<Utc>>) -> Self {
        self.0.next_inspection_date = Some(next);
        self
    }

    #[must_use]
    pub fn build(self) -> InspectionUpdate {
        self.0
    }
}

impl Default for InspectionUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
