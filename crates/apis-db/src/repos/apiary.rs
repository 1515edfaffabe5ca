//! Apiary repository: CRUD with a derived hive count.

use chrono::Utc;

use apis_core::entities::Apiary;
use apis_core::ids::PREFIX_APIARY;
use apis_core::inputs::NewApiary;

use crate::error::DatabaseError;
use crate::helpers::{UpdateSet, format_datetime, nullable, parse_datetime, parse_enum};
use crate::service::ApisService;
use crate::updates::apiary::ApiaryUpdate;

const INSERT_COLS: &str = "id, name, location, latitude, longitude, status, created_at, updated_at";

const SELECT_COLS: &str = "a.id, a.name, a.location, a.latitude, a.longitude, a.status, \
     (SELECT COUNT(*) FROM hives h WHERE h.apiary_id = a.id), a.created_at, a.updated_at";

fn row_to_apiary(row: &libsql::Row) -> Result<Apiary, DatabaseError> {
    let hive_count = row.get::<i64>(6)?;
    Ok(Apiary {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        latitude: row.get::<Option<f64>>(3)?,
        longitude: row.get::<Option<f64>>(4)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        hive_count: u32::try_from(hive_count)
            .map_err(|_| DatabaseError::InvalidState(format!("hive count {hive_count}")))?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl ApisService {
    pub async fn create_apiary(&self, input: &NewApiary) -> Result<Apiary, DatabaseError> {
        input.validate()?;
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_APIARY).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO apiaries ({INSERT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
                libsql::params![
                    id.as_str(),
                    input.name.as_str(),
                    input.location.as_str(),
                    input.latitude,
                    input.longitude,
                    input.status.as_str(),
                    format_datetime(now),
                    format_datetime(now)
                ],
            )
            .await?;

        tracing::debug!(apiary_id = %id, "apiary created");
        Ok(Apiary {
            id,
            name: input.name.clone(),
            location: input.location.clone(),
            latitude: input.latitude,
            longitude: input.longitude,
            status: input.status,
            hive_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_apiary(&self, id: &str) -> Result<Apiary, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM apiaries a WHERE a.id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("apiary", id))?;
        row_to_apiary(&row)
    }

    pub async fn list_apiaries(&self, limit: u32) -> Result<Vec<Apiary>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM apiaries a ORDER BY a.name LIMIT {limit}"),
                (),
            )
            .await?;

        let mut apiaries = Vec::new();
        while let Some(row) = rows.next().await? {
            apiaries.push(row_to_apiary(&row)?);
        }
        Ok(apiaries)
    }

    pub async fn update_apiary(
        &self,
        apiary_id: &str,
        update: ApiaryUpdate,
    ) -> Result<Apiary, DatabaseError> {
        let mut set = UpdateSet::default();
        if let Some(name) = update.name {
            set.push("name", name);
        }
        if let Some(location) = update.location {
            set.push("location", location);
        }
        if let Some(latitude) = update.latitude {
            set.push("latitude", nullable(latitude));
        }
        if let Some(longitude) = update.longitude {
            set.push("longitude", nullable(longitude));
        }
        if let Some(status) = update.status {
            set.push("status", status.as_str());
        }

        if set.is_empty() {
            return self.get_apiary(apiary_id).await;
        }

        let (sql, params) = set.into_sql("apiaries", apiary_id, Some(Utc::now()));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("apiary", apiary_id));
        }
        self.get_apiary(apiary_id).await
    }

    /// Delete an apiary. Its hives and everything attached to them go with it.
    pub async fn delete_apiary(&self, apiary_id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM apiaries WHERE id = ?1", [apiary_id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("apiary", apiary_id));
        }
        tracing::debug!(apiary_id, "apiary deleted");
        Ok(())
    }
}
