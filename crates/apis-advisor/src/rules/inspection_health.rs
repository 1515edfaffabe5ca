//! Findings recorded on recent inspections.

use apis_core::entities::Inspection;
use apis_core::enums::{AlertSeverity, AlertType, HealthStatus, ResourceLevel};
use chrono::{DateTime, Utc};

use super::{QUEEN_ABSENCE_DAYS, RECENT_INSPECTION_DAYS, days_since};
use crate::AlertDraft;

/// Emit drafts for every finding on inspections at most 30 whole days old.
///
/// Each inspection is checked independently. Its drafts come out in a fixed
/// order: varroa, disease, queen, health status, honey stores.
#[must_use]
pub fn evaluate(inspections: &[Inspection], now: DateTime<Utc>) -> Vec<AlertDraft> {
    inspections
        .iter()
        .filter(|i| days_since(now, i.inspection_date) <= RECENT_INSPECTION_DAYS)
        .flat_map(|i| findings(i, now))
        .collect()
}

fn findings(inspection: &Inspection, now: DateTime<Utc>) -> Vec<AlertDraft> {
    let hive = inspection.hive_id.as_str();
    let mut drafts = Vec::new();

    if inspection.varroa_mites_detected {
        drafts.push(AlertDraft::for_hive(
            AlertType::Pest,
            AlertSeverity::Critical,
            hive,
            "Varroa Mites Detected",
            format!("Varroa mites detected in Hive {hive}. Consider treatment options."),
        ));
    }

    if inspection.disease_detected {
        let description = inspection
            .disease_description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("Unknown disease");
        drafts.push(AlertDraft::for_hive(
            AlertType::Disease,
            AlertSeverity::Critical,
            hive,
            "Disease Detected",
            format!("Disease detected in Hive {hive}: {description}"),
        ));
    }

    if !inspection.queen_seen && days_since(now, inspection.inspection_date) >= QUEEN_ABSENCE_DAYS
    {
        drafts.push(AlertDraft::for_hive(
            AlertType::HiveHealth,
            AlertSeverity::Warning,
            hive,
            "Queen Not Seen",
            format!("Queen not seen in Hive {hive} for over 2 weeks. Verify queen presence."),
        ));
    }

    if let Some(severity) = health_severity(inspection.health_status) {
        drafts.push(AlertDraft::for_hive(
            AlertType::HiveHealth,
            severity,
            hive,
            format!("Hive Health: {}", inspection.health_status),
            format!("Hive {hive} requires attention. Inspect and address issues promptly."),
        ));
    }

    if is_low(inspection.honey_stores) {
        drafts.push(AlertDraft::for_hive(
            AlertType::HiveHealth,
            AlertSeverity::Warning,
            hive,
            "Low Honey Stores",
            format!("Hive {hive} has low honey stores. Consider feeding."),
        ));
    }

    drafts
}

/// Severity for a recorded health status, if it warrants an alert.
#[must_use]
pub const fn health_severity(status: HealthStatus) -> Option<AlertSeverity> {
    match status {
        HealthStatus::Critical => Some(AlertSeverity::Critical),
        HealthStatus::Concerning => Some(AlertSeverity::Warning),
        HealthStatus::Excellent | HealthStatus::Healthy | HealthStatus::NeedsAttention => None,
    }
}

/// Stores at or below `Low`.
///
/// `None` is the empty level. `VeryLow` sits between empty and low, so it
/// counts as low too.
#[must_use]
pub const fn is_low(level: ResourceLevel) -> bool {
    match level {
        ResourceLevel::None | ResourceLevel::VeryLow | ResourceLevel::Low => true,
        ResourceLevel::Adequate | ResourceLevel::Good | ResourceLevel::Excellent => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{inspection, june_noon};
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn titles(drafts: &[AlertDraft]) -> Vec<&str> {
        drafts.iter().map(|d| d.title.as_str()).collect()
    }

    #[rstest]
    #[case::excellent(HealthStatus::Excellent, None)]
    #[case::healthy(HealthStatus::Healthy, None)]
    #[case::concerning(HealthStatus::Concerning, Some(AlertSeverity::Warning))]
    #[case::needs_attention(HealthStatus::NeedsAttention, None)]
    #[case::critical(HealthStatus::Critical, Some(AlertSeverity::Critical))]
    fn health_status_mapping(
        #[case] status: HealthStatus,
        #[case] expected: Option<AlertSeverity>,
    ) {
        let now = june_noon();
        let mut insp = inspection("ins-1", "hiv-a", now - Duration::days(1));
        insp.health_status = status;

        let drafts = evaluate(&[insp], now);
        assert_eq!(drafts.first().map(|d| d.severity), expected);
        if expected.is_some() {
            assert_eq!(drafts[0].title, format!("Hive Health: {status}"));
            assert_eq!(drafts[0].alert_type, AlertType::HiveHealth);
        } else {
            assert!(drafts.is_empty());
        }
    }

    #[test]
    fn every_finding_fires_in_order() {
        let now = june_noon();
        let mut insp = inspection("ins-1", "hiv-a", now - Duration::days(20));
        insp.varroa_mites_detected = true;
        insp.disease_detected = true;
        insp.disease_description = Some("American foulbrood".into());
        insp.queen_seen = false;
        insp.health_status = HealthStatus::Critical;
        insp.honey_stores = ResourceLevel::None;

        let drafts = evaluate(&[insp], now);
        assert_eq!(
            titles(&drafts),
            vec![
                "Varroa Mites Detected",
                "Disease Detected",
                "Queen Not Seen",
                "Hive Health: CRITICAL",
                "Low Honey Stores",
            ]
        );
        assert_eq!(
            drafts[1].message,
            "Disease detected in Hive hiv-a: American foulbrood"
        );
        assert!(drafts.iter().all(|d| d.hive_ids == vec!["hiv-a".to_string()]));
    }

    #[test]
    fn disease_without_description() {
        let now = june_noon();
        let mut insp = inspection("ins-1", "hiv-a", now);
        insp.disease_detected = true;

        let drafts = evaluate(&[insp], now);
        assert_eq!(drafts[0].message, "Disease detected in Hive hiv-a: Unknown disease");
        assert_eq!(drafts[0].severity, AlertSeverity::Critical);
    }

    #[rstest]
    #[case::recent(13, false)]
    #[case::two_weeks(14, true)]
    #[case::older(29, true)]
    fn unseen_queen_needs_two_weeks(#[case] age: i64, #[case] fires: bool) {
        let now = june_noon();
        let mut insp = inspection("ins-1", "hiv-a", now - Duration::days(age));
        insp.queen_seen = false;

        let drafts = evaluate(&[insp], now);
        assert_eq!(titles(&drafts).contains(&"Queen Not Seen"), fires);
    }

    #[rstest]
    #[case(ResourceLevel::None, true)]
    #[case(ResourceLevel::VeryLow, true)]
    #[case(ResourceLevel::Low, true)]
    #[case(ResourceLevel::Adequate, false)]
    #[case(ResourceLevel::Good, false)]
    #[case(ResourceLevel::Excellent, false)]
    fn low_honey_levels(#[case] level: ResourceLevel, #[case] fires: bool) {
        assert_eq!(is_low(level), fires);
    }

    #[rstest]
    #[case::thirty_days(30, 1)]
    #[case::thirty_one_days(31, 0)]
    fn only_recent_inspections(#[case] age: i64, #[case] expected: usize) {
        let now = june_noon();
        let mut insp = inspection("ins-1", "hiv-a", now - Duration::days(age));
        insp.varroa_mites_detected = true;

        assert_eq!(evaluate(&[insp], now).len(), expected);
    }
}
