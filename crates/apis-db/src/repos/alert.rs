//! Alert repository.
//!
//! `hive_ids` is stored as a JSON array in a TEXT column. The advisor writes
//! through `insert_alert` and reads the active set through `list_active_alerts`.

use chrono::Utc;

use apis_core::entities::Alert;
use apis_core::ids::PREFIX_ALERT;
use apis_core::inputs::NewAlert;

use crate::error::DatabaseError;
use crate::helpers::{
    UpdateSet, encode_id_list, format_datetime, get_bool, get_opt_string, parse_datetime,
    parse_enum, parse_id_list,
};
use crate::service::ApisService;
use crate::updates::alert::AlertUpdate;

const SELECT_COLS: &str = "id, type, title, message, severity, timestamp, hive_ids, dismissed";

fn row_to_alert(row: &libsql::Row) -> Result<Alert, DatabaseError> {
    Ok(Alert {
        id: row.get(0)?,
        alert_type: parse_enum(&row.get::<String>(1)?)?,
        title: row.get(2)?,
        message: row.get(3)?,
        severity: parse_enum(&row.get::<String>(4)?)?,
        timestamp: parse_datetime(&row.get::<String>(5)?)?,
        hive_ids: parse_id_list(get_opt_string(row, 6)?.as_deref())?,
        dismissed: get_bool(row, 7)?,
    })
}

impl ApisService {
    async fn query_alerts(&self, where_order: &str) -> Result<Vec<Alert>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM alerts {where_order}"), ())
            .await?;

        let mut alerts = Vec::new();
        while let Some(row) = rows.next().await? {
            alerts.push(row_to_alert(&row)?);
        }
        Ok(alerts)
    }

    /// Persist a fully formed alert as given.
    pub async fn insert_alert(&self, alert: &Alert) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO alerts ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
                libsql::params![
                    alert.id.as_str(),
                    alert.alert_type.as_str(),
                    alert.title.as_str(),
                    alert.message.as_str(),
                    alert.severity.as_str(),
                    format_datetime(alert.timestamp),
                    encode_id_list(&alert.hive_ids)?,
                    i64::from(alert.dismissed)
                ],
            )
            .await?;
        Ok(())
    }

    /// Create a user-authored alert. The store assigns id and timestamp.
    pub async fn create_alert(&self, input: &NewAlert) -> Result<Alert, DatabaseError> {
        input.validate()?;
        let alert = Alert {
            id: self.db().generate_id(PREFIX_ALERT).await?,
            alert_type: input.alert_type,
            title: input.title.clone(),
            message: input.message.clone(),
            severity: input.severity,
            timestamp: Utc::now(),
            hive_ids: input.hive_ids.clone(),
            dismissed: false,
        };
        self.insert_alert(&alert).await?;
        tracing::debug!(alert_id = %alert.id, "alert created");
        Ok(alert)
    }

    pub async fn get_alert(&self, id: &str) -> Result<Alert, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM alerts WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("alert", id))?;
        row_to_alert(&row)
    }

    /// All alerts, dismissed included, newest first.
    pub async fn list_alerts(&self, limit: u32) -> Result<Vec<Alert>, DatabaseError> {
        self.query_alerts(&format!("ORDER BY rowid DESC LIMIT {limit}"))
            .await
    }

    /// Alerts not yet dismissed, in creation order.
    pub async fn list_active_alerts(&self) -> Result<Vec<Alert>, DatabaseError> {
        self.query_alerts("WHERE dismissed = 0 ORDER BY rowid").await
    }

    pub async fn dismiss_alert(&self, id: &str) -> Result<Alert, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("UPDATE alerts SET dismissed = 1 WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("alert", id));
        }
        tracing::debug!(alert_id = id, "alert dismissed");
        self.get_alert(id).await
    }

    pub async fn update_alert(&self, id: &str, update: AlertUpdate) -> Result<Alert, DatabaseError> {
        let mut set = UpdateSet::default();
        if let Some(alert_type) = update.alert_type {
            set.push("type", alert_type.as_str());
        }
        if let Some(title) = update.title {
            set.push("title", title);
        }
        if let Some(message) = update.message {
            set.push("message", message);
        }
        if let Some(severity) = update.severity {
            set.push("severity", severity.as_str());
        }
        if let Some(hive_ids) = update.hive_ids {
            set.push("hive_ids", encode_id_list(&hive_ids)?);
        }
        if let Some(dismissed) = update.dismissed {
            set.push("dismissed", i64::from(dismissed));
        }

        if set.is_empty() {
            return self.get_alert(id).await;
        }

        // Alerts have no updated_at column; the timestamp marks creation.
        let (sql, params) = set.into_sql("alerts", id, None);
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("alert", id));
        }
        self.get_alert(id).await
    }
}
