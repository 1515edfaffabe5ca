//! Duplicate suppression between advisor runs.

use apis_core::entities::Alert;
use apis_core::enums::DedupPolicy;
use chrono::{DateTime, Utc};

use crate::AlertDraft;

/// Drafts kept for persistence and the number dropped as duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DedupOutcome {
    pub kept: Vec<AlertDraft>,
    pub suppressed: usize,
}

/// Filter `drafts` against the active alerts under `policy`.
///
/// With [`DedupPolicy::SameDay`] a draft is dropped when an active alert with
/// the same type, title, and hive ids was created on the UTC day of `now`, or
/// when an earlier draft in the same pass already matched it.
#[must_use]
pub fn apply(
    drafts: Vec<AlertDraft>,
    active: &[Alert],
    policy: DedupPolicy,
    now: DateTime<Utc>,
) -> DedupOutcome {
    match policy {
        DedupPolicy::None => DedupOutcome {
            kept: drafts,
            suppressed: 0,
        },
        DedupPolicy::SameDay => {
            let today = now.date_naive();
            let todays: Vec<&Alert> = active
                .iter()
                .filter(|a| a.is_active() && a.timestamp.date_naive() == today)
                .collect();

            let mut outcome = DedupOutcome::default();
            for draft in drafts {
                let seen = todays.iter().any(|a| draft.matches(a))
                    || outcome.kept.iter().any(|k| same_key(k, &draft));
                if seen {
                    outcome.suppressed += 1;
                } else {
                    outcome.kept.push(draft);
                }
            }
            outcome
        }
    }
}

fn same_key(a: &AlertDraft, b: &AlertDraft) -> bool {
    a.alert_type == b.alert_type && a.title == b.title && a.hive_ids == b.hive_ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use apis_core::enums::{AlertSeverity, AlertType};
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn swarm() -> AlertDraft {
        AlertDraft::general(
            AlertType::Seasonal,
            AlertSeverity::Info,
            "Swarm Season Alert",
            "Spring swarm season is here.",
        )
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 2, 15, 0, 0).unwrap()
    }

    #[test]
    fn none_keeps_everything() {
        let existing = swarm().into_alert("alr-1".into(), now());
        let outcome = apply(vec![swarm(), swarm()], &[existing], DedupPolicy::None, now());
        assert_eq!(outcome.kept.len(), 2);
        assert_eq!(outcome.suppressed, 0);
    }

    #[test]
    fn same_day_drops_matching_active_alert() {
        let existing = swarm().into_alert("alr-1".into(), now() - Duration::hours(10));
        let outcome = apply(vec![swarm()], &[existing], DedupPolicy::SameDay, now());
        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.suppressed, 1);
    }

    #[test]
    fn same_day_ignores_yesterday_and_dismissed() {
        let yesterday = swarm().into_alert("alr-1".into(), now() - Duration::days(1));
        let mut dismissed = swarm().into_alert("alr-2".into(), now());
        dismissed.dismissed = true;

        let outcome = apply(
            vec![swarm()],
            &[yesterday, dismissed],
            DedupPolicy::SameDay,
            now(),
        );
        assert_eq!(outcome.kept, vec![swarm()]);
    }

    #[test]
    fn same_day_collapses_duplicates_within_a_pass() {
        let mut other_hive = swarm();
        other_hive.hive_ids = vec!["hiv-1".into()];

        let outcome = apply(
            vec![swarm(), other_hive.clone(), swarm()],
            &[],
            DedupPolicy::SameDay,
            now(),
        );
        assert_eq!(outcome.kept, vec![swarm(), other_hive]);
        assert_eq!(outcome.suppressed, 1);
    }
}
