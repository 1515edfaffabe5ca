//! Status, category, and scale enums for apis.
//!
//! All enums use `SCREAMING_SNAKE_CASE` serialization, which is also the
//! representation stored in SQL columns (`as_str()` returns the same string).
//! Ordered scales (`AlertSeverity`, `HealthStatus`, `ResourceLevel`) derive
//! `Ord` in declaration order, from least to most significant.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AlertType
// ---------------------------------------------------------------------------

/// Category of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    Task,
    Pest,
    Disease,
    HiveHealth,
    Seasonal,
    Weather,
    General,
}

impl AlertType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "TASK",
            Self::Pest => "PEST",
            Self::Disease => "DISEASE",
            Self::HiveHealth => "HIVE_HEALTH",
            Self::Seasonal => "SEASONAL",
            Self::Weather => "WEATHER",
            Self::General => "GENERAL",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AlertSeverity
// ---------------------------------------------------------------------------

/// Urgency of an alert, ordered `Info < Warning < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// ```text
/// pending → in_progress → completed
///         → overdue     → cancelled
/// ```
///
/// `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Overdue,
}

impl TaskStatus {
    /// Whether the task still needs doing.
    #[must_use]
    pub const fn is_open(self) -> bool {
        match self {
            Self::Pending | Self::InProgress | Self::Overdue => true,
            Self::Completed | Self::Cancelled => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Overdue => "OVERDUE",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskPriority
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskType
// ---------------------------------------------------------------------------

/// Kind of work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    Inspection,
    Feeding,
    WaterCheck,
    SpringInspection,
    SummerInspection,
    FallPreparation,
    WinterCheck,
    PestTreatment,
    DiseaseTreatment,
    Medication,
    HarvestHoney,
    ExtractHoney,
    SplitHive,
    CombineHives,
    Requeen,
    SwarmPrevention,
    SwarmCollection,
    AddBoxes,
    RemoveBoxes,
    CleanEquipment,
    RepairEquipment,
    OrderSupplies,
    RecordKeeping,
    General,
    Other,
}

impl TaskType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inspection => "INSPECTION",
            Self::Feeding => "FEEDING",
            Self::WaterCheck => "WATER_CHECK",
            Self::SpringInspection => "SPRING_INSPECTION",
            Self::SummerInspection => "SUMMER_INSPECTION",
            Self::FallPreparation => "FALL_PREPARATION",
            Self::WinterCheck => "WINTER_CHECK",
            Self::PestTreatment => "PEST_TREATMENT",
            Self::DiseaseTreatment => "DISEASE_TREATMENT",
            Self::Medication => "MEDICATION",
            Self::HarvestHoney => "HARVEST_HONEY",
            Self::ExtractHoney => "EXTRACT_HONEY",
            Self::SplitHive => "SPLIT_HIVE",
            Self::CombineHives => "COMBINE_HIVES",
            Self::Requeen => "REQUEEN",
            Self::SwarmPrevention => "SWARM_PREVENTION",
            Self::SwarmCollection => "SWARM_COLLECTION",
            Self::AddBoxes => "ADD_BOXES",
            Self::RemoveBoxes => "REMOVE_BOXES",
            Self::CleanEquipment => "CLEAN_EQUIPMENT",
            Self::RepairEquipment => "REPAIR_EQUIPMENT",
            Self::OrderSupplies => "ORDER_SUPPLIES",
            Self::RecordKeeping => "RECORD_KEEPING",
            Self::General => "GENERAL",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HealthStatus
// ---------------------------------------------------------------------------

/// Overall colony health recorded at inspection, ordered from best to worst.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Excellent,
    Healthy,
    Concerning,
    NeedsAttention,
    Critical,
}

impl HealthStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Healthy => "HEALTHY",
            Self::Concerning => "CONCERNING",
            Self::NeedsAttention => "NEEDS_ATTENTION",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResourceLevel
// ---------------------------------------------------------------------------

/// Honey or pollen stores observed at inspection, ordered from empty to full.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceLevel {
    None,
    VeryLow,
    Low,
    Adequate,
    Good,
    Excellent,
}

impl ResourceLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::VeryLow => "VERY_LOW",
            Self::Low => "LOW",
            Self::Adequate => "ADEQUATE",
            Self::Good => "GOOD",
            Self::Excellent => "EXCELLENT",
        }
    }
}

impl fmt::Display for ResourceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Inspection observations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueenCellStatus {
    None,
    QueenCups,
    ChargedCells,
    CappedCells,
    SupersedureCells,
    SwarmCells,
}

impl QueenCellStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::QueenCups => "QUEEN_CUPS",
            Self::ChargedCells => "CHARGED_CELLS",
            Self::CappedCells => "CAPPED_CELLS",
            Self::SupersedureCells => "SUPERSEDURE_CELLS",
            Self::SwarmCells => "SWARM_CELLS",
        }
    }
}

impl fmt::Display for QueenCellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BroodPattern {
    Excellent,
    Good,
    Spotty,
    Poor,
    None,
}

impl BroodPattern {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Spotty => "SPOTTY",
            Self::Poor => "POOR",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for BroodPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColonyTemperament {
    VeryCalm,
    Calm,
    Moderate,
    Defensive,
    Aggressive,
    VeryAggressive,
}

impl ColonyTemperament {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryCalm => "VERY_CALM",
            Self::Calm => "CALM",
            Self::Moderate => "MODERATE",
            Self::Defensive => "DEFENSIVE",
            Self::Aggressive => "AGGRESSIVE",
            Self::VeryAggressive => "VERY_AGGRESSIVE",
        }
    }
}

impl fmt::Display for ColonyTemperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColonyPopulation {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl ColonyPopulation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryWeak => "VERY_WEAK",
            Self::Weak => "WEAK",
            Self::Medium => "MEDIUM",
            Self::Strong => "STRONG",
            Self::VeryStrong => "VERY_STRONG",
        }
    }
}

impl fmt::Display for ColonyPopulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Hive summary fields
// ---------------------------------------------------------------------------

/// Dashboard status of a hive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HiveStatus {
    Strong,
    Alert,
    NeedsInspection,
    Weak,
}

impl HiveStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "STRONG",
            Self::Alert => "ALERT",
            Self::NeedsInspection => "NEEDS_INSPECTION",
            Self::Weak => "WEAK",
        }
    }
}

impl fmt::Display for HiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColonyStrength {
    Strong,
    Moderate,
    Weak,
}

impl ColonyStrength {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "STRONG",
            Self::Moderate => "MODERATE",
            Self::Weak => "WEAK",
        }
    }
}

impl fmt::Display for ColonyStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueenStatus {
    Laying,
    NotLaying,
    Missing,
    Unknown,
}

impl QueenStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Laying => "LAYING",
            Self::NotLaying => "NOT_LAYING",
            Self::Missing => "MISSING",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for QueenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse temperament kept on the hive record (inspections use
/// [`ColonyTemperament`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HiveTemperament {
    Calm,
    Moderate,
    Defensive,
}

impl HiveTemperament {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calm => "CALM",
            Self::Moderate => "MODERATE",
            Self::Defensive => "DEFENSIVE",
        }
    }
}

impl fmt::Display for HiveTemperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HoneyStores {
    Full,
    Adequate,
    Low,
    Empty,
}

impl HoneyStores {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Adequate => "ADEQUATE",
            Self::Low => "LOW",
            Self::Empty => "EMPTY",
        }
    }
}

impl fmt::Display for HoneyStores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ApiaryStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiaryStatus {
    Healthy,
    Warning,
    Alert,
}

impl ApiaryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "HEALTHY",
            Self::Warning => "WARNING",
            Self::Alert => "ALERT",
        }
    }
}

impl fmt::Display for ApiaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    Positive,
    Warning,
    ActionRequired,
    Info,
}

impl RecommendationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Warning => "WARNING",
            Self::ActionRequired => "ACTION_REQUIRED",
            Self::Info => "INFO",
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DedupPolicy
// ---------------------------------------------------------------------------

/// How the advisor treats a generated alert that matches one already active.
///
/// Configured as `advisor.dedup` (`"none"` or `"same_day"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// Persist every match on every run.
    #[default]
    None,
    /// Skip a match when an active alert with the same type, title, and hive
    /// ids was created on the same UTC day.
    SameDay,
}

impl DedupPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SameDay => "same_day",
        }
    }
}

impl fmt::Display for DedupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
