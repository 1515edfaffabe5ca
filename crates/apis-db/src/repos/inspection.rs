//! Inspection repository.
//!
//! Creating an inspection also moves the hive's `last_inspected` forward;
//! updating its date or deleting it recomputes that stamp. User-scoped
//! operations fail with `DatabaseError::Forbidden` on another user's record.
//! `list_all_inspections` is the fact reader the advisor consumes.

use chrono::Utc;

use apis_core::entities::Inspection;
use apis_core::errors::CoreError;
use apis_core::ids::PREFIX_INSPECTION;
use apis_core::inputs::NewInspection;

use crate::error::DatabaseError;
use crate::helpers::{
    UpdateSet, format_datetime, get_bool, get_opt_datetime, get_opt_string, get_opt_u32,
    nullable, parse_datetime, parse_enum,
};
use crate::service::ApisService;
use crate::updates::inspection::InspectionUpdate;

const SELECT_COLS: &str = "id, hive_id, user_id, inspection_date, duration_minutes, \
     queen_seen, queen_marked, queen_cells, brood_pattern, temperament, population, \
     health_status, varroa_mites_detected, disease_detected, disease_description, pests_notes, \
     honey_stores, pollen_stores, notes, next_inspection_date, created_at, updated_at";

fn row_to_inspection(row: &libsql::Row) -> Result<Inspection, DatabaseError> {
    Ok(Inspection {
        id: row.get(0)?,
        hive_id: row.get(1)?,
        user_id: row.get(2)?,
        inspection_date: parse_datetime(&row.get::<String>(3)?)?,
        duration_minutes: get_opt_u32(row, 4)?,
        queen_seen: get_bool(row, 5)?,
        queen_marked: get_bool(row, 6)?,
        queen_cells: parse_enum(&row.get::<String>(7)?)?,
        brood_pattern: parse_enum(&row.get::<String>(8)?)?,
        temperament: parse_enum(&row.get::<String>(9)?)?,
        population: parse_enum(&row.get::<String>(10)?)?,
        health_status: parse_enum(&row.get::<String>(11)?)?,
        varroa_mites_detected: get_bool(row, 12)?,
        disease_detected: get_bool(row, 13)?,
        disease_description: get_opt_string(row, 14)?,
        pests_notes: get_opt_string(row, 15)?,
        honey_stores: parse_enum(&row.get::<String>(16)?)?,
        pollen_stores: parse_enum(&row.get::<String>(17)?)?,
        notes: get_opt_string(row, 18)?,
        next_inspection_date: get_opt_datetime(row, 19)?,
        created_at: parse_datetime(&row.get::<String>(20)?)?,
        updated_at: parse_datetime(&row.get::<String>(21)?)?,
    })
}

impl ApisService {
    pub async fn create_inspection(
        &self,
        input: &NewInspection,
    ) -> Result<Inspection, DatabaseError> {
        input.validate()?;
        self.get_hive(&input.hive_id).await?;
        self.get_user(&input.user_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_INSPECTION).await?;

        let params: Vec<libsql::Value> = vec![
            id.as_str().into(),
            input.hive_id.as_str().into(),
            input.user_id.as_str().into(),
            format_datetime(input.inspection_date).into(),
            input
                .duration_minutes
                .map_or(libsql::Value::Null, |m| i64::from(m).into()),
            i64::from(input.queen_seen).into(),
            i64::from(input.queen_marked).into(),
            input.queen_cells.as_str().into(),
            input.brood_pattern.as_str().into(),
            input.temperament.as_str().into(),
            input.population.as_str().into(),
            input.health_status.as_str().into(),
            i64::from(input.varroa_mites_detected).into(),
            i64::from(input.disease_detected).into(),
            input
                .disease_description
                .as_deref()
                .map_or(libsql::Value::Null, Into::into),
            input.pests_notes.as_deref().map_or(libsql::Value::Null, Into::into),
            input.honey_stores.as_str().into(),
            input.pollen_stores.as_str().into(),
            input.notes.as_deref().map_or(libsql::Value::Null, Into::into),
            input
                .next_inspection_date
                .map_or(libsql::Value::Null, |d| format_datetime(d).into()),
            format_datetime(now).into(),
            format_datetime(now).into(),
        ];
        let placeholders = (1..=params.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO inspections ({SELECT_COLS}) VALUES ({placeholders})"),
                libsql::params_from_iter(params),
            )
            .await?;

        self.stamp_last_inspected(&input.hive_id, input.inspection_date)
            .await?;

        tracing::debug!(inspection_id = %id, hive_id = %input.hive_id, "inspection recorded");
        Ok(Inspection {
            id,
            hive_id: input.hive_id.clone(),
            user_id: input.user_id.clone(),
            inspection_date: input.inspection_date,
            duration_minutes: input.duration_minutes,
            queen_seen: input.queen_seen,
            queen_marked: input.queen_marked,
            queen_cells: input.queen_cells,
            brood_pattern: input.brood_pattern,
            temperament: input.temperament,
            population: input.population,
            health_status: input.health_status,
            varroa_mites_detected: input.varroa_mites_detected,
            disease_detected: input.disease_detected,
            disease_description: input.disease_description.clone(),
            pests_notes: input.pests_notes.clone(),
            honey_stores: input.honey_stores,
            pollen_stores: input.pollen_stores,
            notes: input.notes.clone(),
            next_inspection_date: input.next_inspection_date,
            created_at: now,
            updated_at: now,
        })
    }

    async fn query_inspections(
        &self,
        where_order: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<Inspection>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM inspections {where_order}"),
                libsql::params_from_iter(params),
            )
            .await?;

        let mut inspections = Vec::new();
        while let Some(row) = rows.next().await? {
            inspections.push(row_to_inspection(&row)?);
        }
        Ok(inspections)
    }

    pub async fn get_inspection(&self, id: &str) -> Result<Inspection, DatabaseError> {
        self.query_inspections("WHERE id = ?1", vec![id.into()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::not_found("inspection", id))
    }

    /// Fetch an inspection, checking that `user_id` recorded it.
    pub async fn get_inspection_for_user(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Inspection, DatabaseError> {
        let inspection = self.get_inspection(id).await?;
        if inspection.user_id != user_id {
            return Err(DatabaseError::Forbidden(format!(
                "inspection {id} belongs to another user"
            )));
        }
        Ok(inspection)
    }

    /// Every inspection, in creation order.
    ///
    /// A row that does not parse fails the whole read.
    pub async fn list_all_inspections(&self) -> Result<Vec<Inspection>, DatabaseError> {
        self.query_inspections("ORDER BY rowid", Vec::new()).await
    }

    /// Inspections for one hive, newest first.
    pub async fn list_inspections_for_hive(
        &self,
        hive_id: &str,
        limit: u32,
    ) -> Result<Vec<Inspection>, DatabaseError> {
        self.query_inspections(
            &format!("WHERE hive_id = ?1 ORDER BY inspection_date DESC LIMIT {limit}"),
            vec![hive_id.into()],
        )
        .await
    }

    /// The user's most recent inspections across all hives, newest first.
    pub async fn list_recent_inspections(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<Inspection>, DatabaseError> {
        self.query_inspections(
            &format!("WHERE user_id = ?1 ORDER BY inspection_date DESC LIMIT {limit}"),
            vec![user_id.into()],
        )
        .await
    }

    /// The newest inspection of a hive.
    ///
    /// `NotFound` when the hive has never been inspected, `Forbidden` when the
    /// newest inspection was recorded by another user.
    pub async fn latest_inspection_for_hive(
        &self,
        user_id: &str,
        hive_id: &str,
    ) -> Result<Inspection, DatabaseError> {
        let latest = self
            .list_inspections_for_hive(hive_id, 1)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::not_found("inspection for hive", hive_id))?;
        if latest.user_id != user_id {
            return Err(DatabaseError::Forbidden(format!(
                "inspection {} belongs to another user",
                latest.id
            )));
        }
        Ok(latest)
    }

    /// Apply a partial update.
    ///
    /// The merged record must still pass the creation checks. When the date
    /// changes the hive's `last_inspected` is recomputed.
    pub async fn update_inspection(
        &self,
        user_id: &str,
        inspection_id: &str,
        update: InspectionUpdate,
    ) -> Result<Inspection, DatabaseError> {
        let current = self.get_inspection_for_user(user_id, inspection_id).await?;

        let disease_detected = update.disease_detected.unwrap_or(current.disease_detected);
        let has_description = update
            .disease_description
            .as_ref()
            .map_or(current.disease_description.is_some(), Option::is_some);
        if !disease_detected && has_description {
            return Err(CoreError::Validation(
                "diseaseDescription requires diseaseDetected".into(),
            )
            .into());
        }
        let inspection_date = update.inspection_date.unwrap_or(current.inspection_date);
        let next_date = update
            .next_inspection_date
            .unwrap_or(current.next_inspection_date);
        if next_date.is_some_and(|next| next < inspection_date) {
            return Err(CoreError::Validation(
                "nextInspectionDate is before inspectionDate".into(),
            )
            .into());
        }

        let mut set = UpdateSet::default();
        if let Some(date) = update.inspection_date {
            set.push("inspection_date", format_datetime(date));
        }
        if let Some(minutes) = update.duration_minutes {
            set.push("duration_minutes", nullable(minutes.map(i64::from)));
        }
        if let Some(seen) = update.queen_seen {
            set.push("queen_seen", i64::from(seen));
        }
        if let Some(marked) = update.queen_marked {
            set.push("queen_marked", i64::from(marked));
        }
        if let Some(cells) = update.queen_cells {
            set.push("queen_cells", cells.as_str());
        }
        if let Some(pattern) = update.brood_pattern {
            set.push("brood_pattern", pattern.as_str());
        }
        if let Some(temperament) = update.temperament {
            set.push("temperament", temperament.as_str());
        }
        if let Some(population) = update.population {
            set.push("population", population.as_str());
        }
        if let Some(health) = update.health_status {
            set.push("health_status", health.as_str());
        }
        if let Some(varroa) = update.varroa_mites_detected {
            set.push("varroa_mites_detected", i64::from(varroa));
        }
        if let Some(disease) = update.disease_detected {
            set.push("disease_detected", i64::from(disease));
        }
        if let Some(description) = update.disease_description {
            set.push("disease_description", nullable(description));
        }
        if let Some(pests) = update.pests_notes {
            set.push("pests_notes", nullable(pests));
        }
        if let Some(honey) = update.honey_stores {
            set.push("honey_stores", honey.as_str());
        }
        if let Some(pollen) = update.pollen_stores {
            set.push("pollen_stores", pollen.as_str());
        }
        if let Some(notes) = update.notes {
            set.push("notes", nullable(notes));
        }
        if let Some(next) = update.next_inspection_date {
            set.push("next_inspection_date", nullable(next.map(format_datetime)));
        }

        if set.is_empty() {
            return Ok(current);
        }

        let (sql, params) = set.into_sql("inspections", inspection_id, Some(Utc::now()));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        if inspection_date != current.inspection_date {
            self.refresh_last_inspected(&current.hive_id).await?;
        }
        self.get_inspection(inspection_id).await
    }

    /// Delete an inspection the user recorded and recompute the hive's
    /// `last_inspected`.
    pub async fn delete_inspection(
        &self,
        user_id: &str,
        inspection_id: &str,
    ) -> Result<(), DatabaseError> {
        let inspection = self.get_inspection_for_user(user_id, inspection_id).await?;
        self.db()
            .conn()
            .execute("DELETE FROM inspections WHERE id = ?1", [inspection_id])
            .await?;
        self.refresh_last_inspected(&inspection.hive_id).await
    }
}
