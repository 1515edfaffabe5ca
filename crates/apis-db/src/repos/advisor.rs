//! Advisor pass: read facts, evaluate rules, persist new alerts.
//!
//! The rule logic lives in `apis-advisor`. This module supplies the facts from
//! the store, applies the configured dedup policy, and writes each surviving
//! draft as a new alert. Existing alerts are read through and never modified.

use chrono::{DateTime, Utc};

use apis_advisor::{FactSnapshot, dedup};
use apis_core::entities::Alert;
use apis_core::enums::DedupPolicy;
use apis_core::ids::PREFIX_ALERT;
use apis_core::responses::AdvisorReport;

use crate::error::DatabaseError;
use crate::service::ApisService;

impl ApisService {
    /// Run an advisor pass against the system clock.
    ///
    /// Returns the active alerts that already existed, followed by the alerts
    /// this pass created.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a fact cannot be read or an alert cannot be
    /// written. Alerts written before the failure stay persisted.
    pub async fn generate_alerts(&self) -> Result<Vec<Alert>, DatabaseError> {
        self.generate_alerts_at(Utc::now()).await
    }

    /// [`generate_alerts`](Self::generate_alerts) with an explicit clock.
    pub async fn generate_alerts_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Alert>, DatabaseError> {
        Ok(self.run_advisor_at(now).await?.alerts)
    }

    /// Full advisor pass with counts, as reported by `apis advise`.
    pub async fn run_advisor_at(&self, now: DateTime<Utc>) -> Result<AdvisorReport, DatabaseError> {
        self.run_advisor_with_policy(now, self.dedup_policy()).await
    }

    /// Advisor pass under an explicit dedup policy, ignoring the configured one.
    pub async fn run_advisor_with_policy(
        &self,
        now: DateTime<Utc>,
        policy: DedupPolicy,
    ) -> Result<AdvisorReport, DatabaseError> {
        let active = self.list_active_alerts().await?;
        let facts = FactSnapshot {
            tasks: self.list_all_tasks().await?,
            inspections: self.list_all_inspections().await?,
        };

        let drafts = apis_advisor::evaluate(&facts, now);
        let outcome = dedup::apply(drafts, &active, policy, now);

        let mut created = Vec::with_capacity(outcome.kept.len());
        for draft in outcome.kept {
            let id = self.db().generate_id(PREFIX_ALERT).await?;
            let alert = draft.into_alert(id, now);
            self.insert_alert(&alert).await?;
            created.push(alert);
        }

        tracing::info!(
            existing = active.len(),
            generated = created.len(),
            suppressed = outcome.suppressed,
            dedup = %policy,
            "advisor pass complete"
        );

        let existing = u32::try_from(active.len()).unwrap_or(u32::MAX);
        let generated = u32::try_from(created.len()).unwrap_or(u32::MAX);
        let suppressed = u32::try_from(outcome.suppressed).unwrap_or(u32::MAX);

        let mut alerts = active;
        alerts.extend(created);
        Ok(AdvisorReport {
            existing,
            generated,
            suppressed,
            alerts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{test_service, test_user};
    use apis_core::enums::{AlertSeverity, AlertType};
    use apis_core::inputs::NewTask;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn june() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn empty_store_in_june_yields_nothing() {
        let svc = test_service().await;
        assert!(svc.generate_alerts_at(june()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn generated_alerts_are_persisted() {
        let svc = test_service().await;
        let march = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();

        let alerts = svc.generate_alerts_at(march).await.unwrap();
        let titles: Vec<_> = alerts.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Swarm Season Alert", "Spring Inspection Time"]);

        for alert in &alerts {
            assert!(alert.id.starts_with("alr-"));
            assert_eq!(alert.timestamp, march);
            assert_eq!(&svc.get_alert(&alert.id).await.unwrap(), alert);
        }
    }

    #[tokio::test]
    async fn existing_alerts_come_first() {
        let svc = test_service().await;
        let user = test_user(&svc).await;
        let earlier = svc
            .create_alert(&apis_core::inputs::NewAlert {
                alert_type: AlertType::General,
                title: "Order frames".into(),
                message: "Stock is low.".into(),
                severity: AlertSeverity::Info,
                hive_ids: vec![],
            })
            .await
            .unwrap();
        svc.create_task(&NewTask::new("Feed", &user.id, june() - Duration::days(3)))
            .await
            .unwrap();

        let alerts = svc.generate_alerts_at(june()).await.unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0], earlier);
        assert_eq!(alerts[1].alert_type, AlertType::Task);
        assert_eq!(alerts[1].title, "1 Overdue Task");
        assert_eq!(alerts[1].severity, AlertSeverity::Warning);
    }

    #[tokio::test]
    async fn report_counts_suppressed_drafts() {
        let svc = test_service()
            .await
            .with_dedup_policy(DedupPolicy::SameDay);
        let august = Utc.with_ymd_and_hms(2025, 8, 1, 8, 0, 0).unwrap();

        let first = svc.run_advisor_at(august).await.unwrap();
        assert_eq!((first.existing, first.generated, first.suppressed), (0, 1, 0));

        let second = svc
            .run_advisor_at(august + Duration::hours(4))
            .await
            .unwrap();
        assert_eq!((second.existing, second.generated, second.suppressed), (1, 0, 1));
        assert_eq!(second.alerts, first.alerts);
    }

    #[tokio::test]
    async fn explicit_policy_overrides_configured_one() {
        let svc = test_service().await;
        let august = Utc.with_ymd_and_hms(2025, 8, 1, 8, 0, 0).unwrap();

        svc.run_advisor_at(august).await.unwrap();
        let report = svc
            .run_advisor_with_policy(august, DedupPolicy::SameDay)
            .await
            .unwrap();
        assert_eq!(report.generated, 0);
        assert_eq!(report.suppressed, 1);
    }
}
