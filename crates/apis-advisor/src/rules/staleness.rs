//! Hives that have gone too long without an inspection.

use apis_core::entities::Inspection;
use apis_core::enums::{AlertSeverity, AlertType};
use chrono::{DateTime, Utc};

use super::{STALE_CRITICAL_DAYS, STALE_INSPECTION_DAYS, days_since};
use crate::AlertDraft;

/// Latest inspection date per hive, hives in order of first appearance.
#[must_use]
pub fn latest_per_hive(inspections: &[Inspection]) -> Vec<(&str, DateTime<Utc>)> {
    let mut latest: Vec<(&str, DateTime<Utc>)> = Vec::new();
    for inspection in inspections {
        let hive = inspection.hive_id.as_str();
        match latest.iter_mut().find(|(h, _)| *h == hive) {
            Some((_, date)) if inspection.inspection_date > *date => {
                *date = inspection.inspection_date;
            }
            Some(_) => {}
            None => latest.push((hive, inspection.inspection_date)),
        }
    }
    latest
}

/// One draft per hive whose latest inspection is more than 14 days old.
///
/// Hives with no inspections at all are not considered.
#[must_use]
pub fn evaluate(inspections: &[Inspection], now: DateTime<Utc>) -> Vec<AlertDraft> {
    latest_per_hive(inspections)
        .into_iter()
        .filter_map(|(hive, last)| {
            let days = days_since(now, last);
            (days > STALE_INSPECTION_DAYS).then(|| {
                let severity = if days >= STALE_CRITICAL_DAYS {
                    AlertSeverity::Critical
                } else {
                    AlertSeverity::Warning
                };
                AlertDraft::for_hive(
                    AlertType::HiveHealth,
                    severity,
                    hive,
                    "Inspection Overdue",
                    format!(
                        "Hive {hive} hasn't been inspected in {days} days. Schedule an inspection."
                    ),
                )
            })
        })
        .collect()
}
