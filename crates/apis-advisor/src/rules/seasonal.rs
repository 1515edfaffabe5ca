//! Calendar reminders keyed on the UTC month.

use apis_core::enums::{AlertSeverity, AlertType};
use chrono::{DateTime, Datelike, Utc};

use crate::AlertDraft;

/// Reminders for the month of `now`. None of them name a hive.
#[must_use]
pub fn evaluate(now: DateTime<Utc>) -> Vec<AlertDraft> {
    let month = now.month();
    let mut drafts = Vec::new();

    if matches!(month, 3..=5) {
        drafts.push(AlertDraft::general(
            AlertType::Seasonal,
            AlertSeverity::Info,
            "Swarm Season Alert",
            "Spring swarm season is here. Check for queen cells and add supers if needed.",
        ));
    }
    if month == 3 {
        drafts.push(AlertDraft::general(
            AlertType::Seasonal,
            AlertSeverity::Info,
            "Spring Inspection Time",
            "Perform spring inspections to assess winter survival and colony strength.",
        ));
    }
    if matches!(month, 9 | 10) {
        drafts.push(AlertDraft::general(
            AlertType::Seasonal,
            AlertSeverity::Warning,
            "Winter Preparation",
            "Prepare hives for winter: check food stores, reduce entrances, and treat for mites.",
        ));
    }
    if matches!(month, 7 | 8) {
        drafts.push(AlertDraft::general(
            AlertType::Pest,
            AlertSeverity::Info,
            "Varroa Treatment Window",
            "Mid-summer is ideal for varroa mite treatment before fall buildup.",
        ));
    }

    drafts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn in_month(month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, month, 10, 8, 30, 0).unwrap()
    }

    #[rstest]
    #[case(1, vec![])]
    #[case(2, vec![])]
    #[case(3, vec!["Swarm Season Alert", "Spring Inspection Time"])]
    #[case(4, vec!["Swarm Season Alert"])]
    #[case(5, vec!["Swarm Season Alert"])]
    #[case(6, vec![])]
    #[case(7, vec!["Varroa Treatment Window"])]
    #[case(8, vec!["Varroa Treatment Window"])]
    #[case(9, vec!["Winter Preparation"])]
    #[case(10, vec!["Winter Preparation"])]
    #[case(11, vec![])]
    #[case(12, vec![])]
    fn reminders_by_month(#[case] month: u32, #[case] expected: Vec<&str>) {
        let drafts = evaluate(in_month(month));
        let titles: Vec<_> = drafts.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, expected);
        assert!(drafts.iter().all(|d| d.hive_ids.is_empty()));
    }

    #[test]
    fn summer_reminder_is_a_pest_alert() {
        let drafts = evaluate(in_month(7));
        assert_eq!(drafts[0].alert_type, AlertType::Pest);
        assert_eq!(drafts[0].severity, AlertSeverity::Info);
    }

    #[test]
    fn autumn_reminder_is_a_warning() {
        let drafts = evaluate(in_month(9));
        assert_eq!(drafts[0].alert_type, AlertType::Seasonal);
        assert_eq!(drafts[0].severity, AlertSeverity::Warning);
    }
}
