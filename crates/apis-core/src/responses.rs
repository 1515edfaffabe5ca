//! CLI response types returned as JSON by `apis` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Alert, Apiary, Hive, Inspection, Recommendation, Task};

/// Response from `apis advise`.
///
/// `alerts` holds the existing active alerts followed by the newly generated
/// ones, the same sequence `ApisService::generate_alerts` returns.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorReport {
    pub existing: u32,
    pub generated: u32,
    pub suppressed: u32,
    pub alerts: Vec<Alert>,
}

/// Response from `apis hive get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HiveDetail {
    pub hive: Hive,
    pub recent_inspections: Vec<Inspection>,
    pub open_tasks: Vec<Task>,
    pub recommendations: Vec<Recommendation>,
}

/// Response from `apis apiary get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiaryDetail {
    pub apiary: Apiary,
    pub hives: Vec<Hive>,
}

/// Response from `apis task mark-overdue`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OverdueSweep {
    pub marked: u64,
}

/// Response from `apis init`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InitResponse {
    pub project_root: String,
    pub database_path: String,
    pub user_id: String,
    pub created: bool,
}
