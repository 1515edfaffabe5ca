//! Advisory rule groups and the thresholds they share.

pub mod inspection_health;
pub mod overdue_tasks;
pub mod seasonal;
pub mod staleness;

use chrono::{DateTime, Utc};

/// A task overdue by at least this many days is critical.
pub const OVERDUE_CRITICAL_DAYS: i64 = 7;

/// Inspections older than this are ignored by the health rules.
pub const RECENT_INSPECTION_DAYS: i64 = 30;

/// An unseen queen is reported once the inspection is this old.
pub const QUEEN_ABSENCE_DAYS: i64 = 14;

/// A hive whose latest inspection is older than this needs one.
pub const STALE_INSPECTION_DAYS: i64 = 14;

/// Staleness becomes critical at this age.
pub const STALE_CRITICAL_DAYS: i64 = 30;

/// Whole days elapsed from `then` to `now`.
pub(crate) fn days_since(now: DateTime<Utc>, then: DateTime<Utc>) -> i64 {
    (now - then).num_days()
}
