use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{
    BroodPattern, ColonyPopulation, ColonyTemperament, HealthStatus, QueenCellStatus,
    ResourceLevel,
};

/// A dated observational record of a hive's internal state.
///
/// Inspections are facts for the advisor: it reads them and never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub id: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
