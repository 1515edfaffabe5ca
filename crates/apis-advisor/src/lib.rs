//! # apis-advisor
//!
//! Rule-based alert generation for apis.
//!
//! The advisor is pure decision logic: it takes a [`FactSnapshot`] of tasks and
//! inspections plus an explicit `now`, and returns [`AlertDraft`]s. It never
//! touches storage. `apis-db` reads the facts, applies the [`dedup`] policy,
//! and persists the drafts as alerts.
//!
//! Rule groups run in a fixed order and are independent of each other:
//!
//! 1. [`rules::overdue_tasks`]: pending tasks past their due date, grouped by hive
//! 2. [`rules::inspection_health`]: findings from inspections in the last 30 days
//! 3. [`rules::staleness`]: hives whose latest inspection is too old
//! 4. [`rules::seasonal`]: calendar reminders for the current month

pub mod dedup;
pub mod draft;
pub mod rules;

use apis_core::entities::{Inspection, Task};
use chrono::{DateTime, Utc};

pub use draft::AlertDraft;

/// Everything the rule groups read, in creation order.
#[derive(Debug, Clone, Default)]
pub struct FactSnapshot {
    pub tasks: Vec<Task>,
    pub inspections: Vec<Inspection>,
}

/// Run every rule group against `facts` as of `now`.
///
/// Drafts come back in rule-group order. Within a group they follow the order
/// of the facts.
#[must_use]
pub fn evaluate(facts: &FactSnapshot, now: DateTime<Utc>) -> Vec<AlertDraft> {
    let overdue = rules::overdue_tasks::evaluate(&facts.tasks, now);
    let health = rules::inspection_health::evaluate(&facts.inspections, now);
    let stale = rules::staleness::evaluate(&facts.inspections, now);
    let seasonal = rules::seasonal::evaluate(now);

    tracing::debug!(
        overdue = overdue.len(),
        health = health.len(),
        stale = stale.len(),
        seasonal = seasonal.len(),
        "advisor rule groups evaluated"
    );

    let mut drafts = Vec::with_capacity(overdue.len() + health.len() + stale.len() + seasonal.len());
    drafts.extend(overdue);
    drafts.extend(health);
    drafts.extend(stale);
    drafts.extend(seasonal);
    drafts
}

#[cfg(test)]
pub(crate) mod fixtures {
    use apis_core::entities::{Inspection, Task};
    use apis_core::enums::{
        BroodPattern, ColonyPopulation, ColonyTemperament, HealthStatus, QueenCellStatus,
        ResourceLevel, TaskPriority, TaskStatus, TaskType,
    };
    use chrono::{DateTime, Duration, TimeZone, Utc};

    /// A fixed clock in June, outside every seasonal window.
    pub fn june_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    pub fn task(id: &str, hive_id: Option<&str>, due: DateTime<Utc>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {id}"),
            description: None,
            task_type: TaskType::General,
            due_date: due,
            reminder_date: None,
            hive_id: hive_id.map(String::from),
            apiary_id: None,
            user_id: "usr-00000001".into(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            completed_date: None,
            notes: None,
            created_at: due - Duration::days(30),
            updated_at: due - Duration::days(30),
        }
    }

    pub fn inspection(id: &str, hive_id: &str, date: DateTime<Utc>) -> Inspection {
        Inspection {
            id: id.to_string(),
            hive_id: hive_id.to_string(),
            user_id: "usr-00000001".into(),
            inspection_date: date,
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
            created_at: date,
            updated_at: date,
        }
    }
}
