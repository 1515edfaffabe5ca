//! Recommendation repository.

use chrono::Utc;

use apis_core::entities::Recommendation;
use apis_core::ids::PREFIX_RECOMMENDATION;
use apis_core::inputs::NewRecommendation;

use crate::error::DatabaseError;
use crate::helpers::{UpdateSet, format_datetime, parse_datetime, parse_enum};
use crate::service::ApisService;
use crate::updates::recommendation::RecommendationUpdate;

const SELECT_COLS: &str = "id, hive_id, type, title, description, priority, created_at, updated_at";

fn row_to_recommendation(row: &libsql::Row) -> Result<Recommendation, DatabaseError> {
    Ok(Recommendation {
        id: row.get(0)?,
        hive_id: row.get(1)?,
        recommendation_type: parse_enum(&row.get::<String>(2)?)?,
        title: row.get(3)?,
        description: row.get(4)?,
        priority: parse_enum(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl ApisService {
    pub async fn create_recommendation(
        &self,
        input: &NewRecommendation,
    ) -> Result<Recommendation, DatabaseError> {
        input.validate()?;
        self.get_hive(&input.hive_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_RECOMMENDATION).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO recommendations ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    input.hive_id.as_str(),
                    input.recommendation_type.as_str(),
                    input.title.as_str(),
                    input.description.as_str(),
                    input.priority.as_str(),
                    format_datetime(now),
                    format_datetime(now)
                ],
            )
            .await?;

        Ok(Recommendation {
            id,
            hive_id: input.hive_id.clone(),
            recommendation_type: input.recommendation_type,
            title: input.title.clone(),
            description: input.description.clone(),
            priority: input.priority,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_recommendation(&self, id: &str) -> Result<Recommendation, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM recommendations WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("recommendation", id))?;
        row_to_recommendation(&row)
    }

    /// Recommendations for a hive, highest priority first.
    pub async fn list_recommendations_for_hive(
        &self,
        hive_id: &str,
    ) -> Result<Vec<Recommendation>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM recommendations WHERE hive_id = ?1 \
                     ORDER BY CASE priority WHEN 'HIGH' THEN 0 WHEN 'MEDIUM' THEN 1 ELSE 2 END, rowid"
                ),
                [hive_id],
            )
            .await?;

        let mut recommendations = Vec::new();
        while let Some(row) = rows.next().await? {
            recommendations.push(row_to_recommendation(&row)?);
        }
        Ok(recommendations)
    }

    pub async fn update_recommendation(
        &self,
        id: &str,
        update: RecommendationUpdate,
    ) -> Result<Recommendation, DatabaseError> {
        let mut set = UpdateSet::default();
        if let Some(recommendation_type) = update.recommendation_type {
            set.push("type", recommendation_type.as_str());
        }
        if let Some(title) = update.title {
            set.push("title", title);
        }
        if let Some(description) = update.description {
            set.push("description", description);
        }
        if let Some(priority) = update.priority {
            set.push("priority", priority.as_str());
        }

        if set.is_empty() {
            return self.get_recommendation(id).await;
        }

        let (sql, params) = set.into_sql("recommendations", id, Some(Utc::now()));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("recommendation", id));
        }
        self.get_recommendation(id).await
    }

    pub async fn delete_recommendation(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM recommendations WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("recommendation", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{test_apiary, test_hive, test_service};
    use crate::updates::recommendation::RecommendationUpdateBuilder;
    use apis_core::enums::{Priority, RecommendationType};

    fn advice(hive_id: &str, title: &str, priority: Priority) -> NewRecommendation {
        NewRecommendation {
            hive_id: hive_id.to_string(),
            recommendation_type: RecommendationType::ActionRequired,
            title: title.to_string(),
            description: "Check the brood frames.".into(),
            priority,
        }
    }

    #[tokio::test]
    async fn create_recommendation_roundtrip() {
        let svc = test_service().await;
        let apiary = test_apiary(&svc).await;
        let hive = test_hive(&svc, &apiary.id, "A").await;

        let rec = svc
            .create_recommendation(&advice(&hive.id, "Treat", Priority::High))
            .await
            .unwrap();
        assert!(rec.id.starts_with("rec-"));
        assert_eq!(svc.get_recommendation(&rec.id).await.unwrap(), rec);
    }

    #[tokio::test]
    async fn listed_by_priority() {
        let svc = test_service().await;
        let apiary = test_apiary(&svc).await;
        let hive = test_hive(&svc, &apiary.id, "A").await;
        for (title, priority) in [
            ("low", Priority::Low),
            ("high", Priority::High),
            ("medium", Priority::Medium),
        ] {
            svc.create_recommendation(&advice(&hive.id, title, priority))
                .await
                .unwrap();
        }

        let titles: Vec<_> = svc
            .list_recommendations_for_hive(&hive.id)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["high", "medium", "low"]);
    }

    #[tokio::test]
    async fn update_and_delete() {
        let svc = test_service().await;
        let apiary = test_apiary(&svc).await;
        let hive = test_hive(&svc, &apiary.id, "A").await;
        let rec = svc
            .create_recommendation(&advice(&hive.id, "Treat", Priority::High))
            .await
            .unwrap();

        let updated = svc
            .update_recommendation(
                &rec.id,
                RecommendationUpdateBuilder::new()
                    .recommendation_type(RecommendationType::Positive)
                    .priority(Priority::Low)
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.recommendation_type, RecommendationType::Positive);
        assert_eq!(updated.priority, Priority::Low);

        svc.delete_recommendation(&rec.id).await.unwrap();
        assert!(matches!(
            svc.get_recommendation(&rec.id).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }
}
