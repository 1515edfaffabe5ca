use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ColonyStrength, HiveStatus, HiveTemperament, HoneyStores, QueenStatus};

/// A single managed colony.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hive {
    pub id: String,
    pub name: String,
    pub apiary_id: String,
    pub status: HiveStatus,
    pub last_inspected: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub colony_strength: ColonyStrength,
    pub queen_status: QueenStatus,
    pub temperament: HiveTemperament,
    pub honey_stores: HoneyStores,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
