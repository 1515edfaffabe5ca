//! Hive repository.

use chrono::{DateTime, Utc};

use apis_core::entities::Hive;
use apis_core::ids::PREFIX_HIVE;
use apis_core::inputs::NewHive;
use apis_core::responses::HiveDetail;

use crate::error::DatabaseError;
use crate::helpers::{
    UpdateSet, format_datetime, get_opt_datetime, get_opt_string, nullable, parse_datetime,
    parse_enum,
};
use crate::service::ApisService;
use crate::updates::hive::HiveUpdate;

const SELECT_COLS: &str = "id, name, apiary_id, status, last_inspected, image_url, \
     colony_strength, queen_status, temperament, honey_stores, created_at, updated_at";

fn row_to_hive(row: &libsql::Row) -> Result<Hive, DatabaseError> {
    Ok(Hive {
        id: row.get(0)?,
        name: row.get(1)?,
        apiary_id: row.get(2)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        last_inspected: get_opt_datetime(row, 4)?,
        image_url: get_opt_string(row, 5)?,
        colony_strength: parse_enum(&row.get::<String>(6)?)?,
        queen_status: parse_enum(&row.get::<String>(7)?)?,
        temperament: parse_enum(&row.get::<String>(8)?)?,
        honey_stores: parse_enum(&row.get::<String>(9)?)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        updated_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

impl ApisService {
    pub async fn create_hive(&self, input: &NewHive) -> Result<Hive, DatabaseError> {
        input.validate()?;
        // Surface a missing apiary as NotFound rather than a constraint error.
        self.get_apiary(&input.apiary_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_HIVE).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO hives ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"
                ),
                libsql::params![
                    id.as_str(),
                    input.name.as_str(),
                    input.apiary_id.as_str(),
                    input.status.as_str(),
                    libsql::Value::Null,
                    input.image_url.as_deref(),
                    input.colony_strength.as_str(),
                    input.queen_status.as_str(),
                    input.temperament.as_str(),
                    input.honey_stores.as_str(),
                    format_datetime(now),
                    format_datetime(now)
                ],
            )
            .await?;

        tracing::debug!(hive_id = %id, apiary_id = %input.apiary_id, "hive created");
        Ok(Hive {
            id,
            name: input.name.clone(),
            apiary_id: input.apiary_id.clone(),
            status: input.status,
            last_inspected: None,
            image_url: input.image_url.clone(),
            colony_strength: input.colony_strength,
            queen_status: input.queen_status,
            temperament: input.temperament,
            honey_stores: input.honey_stores,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_hive(&self, id: &str) -> Result<Hive, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM hives WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("hive", id))?;
        row_to_hive(&row)
    }

    pub async fn list_hives(&self, limit: u32) -> Result<Vec<Hive>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM hives ORDER BY rowid LIMIT {limit}"),
                (),
            )
            .await?;

        let mut hives = Vec::new();
        while let Some(row) = rows.next().await? {
            hives.push(row_to_hive(&row)?);
        }
        Ok(hives)
    }

    pub async fn list_hives_for_apiary(&self, apiary_id: &str) -> Result<Vec<Hive>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM hives WHERE apiary_id = ?1 ORDER BY rowid"),
                [apiary_id],
            )
            .await?;

        let mut hives = Vec::new();
        while let Some(row) = rows.next().await? {
            hives.push(row_to_hive(&row)?);
        }
        Ok(hives)
    }

    pub async fn update_hive(&self, hive_id: &str, update: HiveUpdate) -> Result<Hive, DatabaseError> {
        if let Some(ref apiary_id) = update.apiary_id {
            self.get_apiary(apiary_id).await?;
        }

        let mut set = UpdateSet::default();
        if let Some(name) = update.name {
            set.push("name", name);
        }
        if let Some(apiary_id) = update.apiary_id {
            set.push("apiary_id", apiary_id);
        }
        if let Some(status) = update.status {
            set.push("status", status.as_str());
        }
        if let Some(image_url) = update.image_url {
            set.push("image_url", nullable(image_url));
        }
        if let Some(strength) = update.colony_strength {
            set.push("colony_strength", strength.as_str());
        }
        if let Some(queen_status) = update.queen_status {
            set.push("queen_status", queen_status.as_str());
        }
        if let Some(temperament) = update.temperament {
            set.push("temperament", temperament.as_str());
        }
        if let Some(honey_stores) = update.honey_stores {
            set.push("honey_stores", honey_stores.as_str());
        }

        if set.is_empty() {
            return self.get_hive(hive_id).await;
        }

        let (sql, params) = set.into_sql("hives", hive_id, Some(Utc::now()));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("hive", hive_id));
        }
        self.get_hive(hive_id).await
    }

    pub async fn delete_hive(&self, hive_id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM hives WHERE id = ?1", [hive_id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("hive", hive_id));
        }
        tracing::debug!(hive_id, "hive deleted");
        Ok(())
    }

    /// A hive with its latest inspections, open tasks, and recommendations.
    pub async fn hive_detail(
        &self,
        hive_id: &str,
        inspection_limit: u32,
    ) -> Result<HiveDetail, DatabaseError> {
        let hive = self.get_hive(hive_id).await?;
        let recent_inspections = self
            .list_inspections_for_hive(hive_id, inspection_limit)
            .await?;
        let open_tasks = self
            .list_tasks_for_hive(hive_id)
            .await?
            .into_iter()
            .filter(|t| t.status.is_open())
            .collect();
        let recommendations = self.list_recommendations_for_hive(hive_id).await?;

        Ok(HiveDetail {
            hive,
            recent_inspections,
            open_tasks,
            recommendations,
        })
    }

    /// Move `last_inspected` forward to `date`. Older dates leave it alone.
    pub(crate) async fn stamp_last_inspected(
        &self,
        hive_id: &str,
        date: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE hives SET last_inspected = ?1, updated_at = ?2
                 WHERE id = ?3 AND (last_inspected IS NULL OR last_inspected < ?1)",
                libsql::params![format_datetime(date), format_datetime(Utc::now()), hive_id],
            )
            .await?;
        Ok(())
    }

    /// Recompute `last_inspected` from the hive's remaining inspections.
    ///
    /// Stored dates share one fixed-width RFC3339 form, so `MAX` over the text
    /// is the latest date. A hive with no inspections left goes back to NULL.
    pub(crate) async fn refresh_last_inspected(&self, hive_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE hives SET last_inspected =
                     (SELECT MAX(inspection_date) FROM inspections WHERE hive_id = ?1),
                     updated_at = ?2
                 WHERE id = ?1",
                libsql::params![hive_id, format_datetime(Utc::now())],
            )
            .await?;
        Ok(())
    }
}
