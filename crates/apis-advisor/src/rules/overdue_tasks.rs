//! Pending tasks past their due date, one alert per hive.

use apis_core::entities::Task;
use apis_core::enums::{AlertSeverity, AlertType};
use chrono::{DateTime, Utc};

use super::{OVERDUE_CRITICAL_DAYS, days_since};
use crate::AlertDraft;

/// Group overdue tasks by hive and emit one draft per group.
///
/// Hiveless tasks share one general group. Groups appear in the order their
/// first task appears in `tasks`.
#[must_use]
pub fn evaluate(tasks: &[Task], now: DateTime<Utc>) -> Vec<AlertDraft> {
    let mut groups: Vec<(Option<&str>, Vec<&Task>)> = Vec::new();
    for task in tasks.iter().filter(|t| t.is_overdue_at(now)) {
        let key = task.hive_id.as_deref();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(task),
            None => groups.push((key, vec![task])),
        }
    }

    groups
        .into_iter()
        .filter_map(|(hive_id, members)| {
            let oldest = members.iter().map(|t| t.due_date).min()?;
            Some(draft_for(hive_id, members.len(), days_since(now, oldest)))
        })
        .collect()
}

fn draft_for(hive_id: Option<&str>, count: usize, days_overdue: i64) -> AlertDraft {
    let severity = if days_overdue >= OVERDUE_CRITICAL_DAYS {
        AlertSeverity::Critical
    } else {
        AlertSeverity::Warning
    };
    let plural = if count > 1 { "s" } else { "" };
    let title = format!("{count} Overdue Task{plural}");
    let message =
        format!("You have {count} overdue task(s). Oldest is {days_overdue} days overdue.");

    match hive_id {
        Some(hive_id) => AlertDraft::for_hive(AlertType::Task, severity, hive_id, title, message),
        None => AlertDraft::general(AlertType::Task, severity, title, message),
    }
}
