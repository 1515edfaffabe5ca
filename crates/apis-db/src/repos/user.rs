//! User repository.

use chrono::Utc;

use apis_core::entities::User;
use apis_core::errors::CoreError;
use apis_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime};
use crate::service::ApisService;

const SELECT_COLS: &str = "id, email, name, created_at, updated_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        name: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl ApisService {
    pub async fn create_user(&self, email: &str, name: Option<&str>) -> Result<User, DatabaseError> {
        if !email.contains('@') {
            return Err(CoreError::Validation(format!("'{email}' is not an email address")).into());
        }
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_USER).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO users ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
                libsql::params![
                    id.as_str(),
                    email,
                    name,
                    format_datetime(now),
                    format_datetime(now)
                ],
            )
            .await?;

        tracing::debug!(user_id = %id, "user created");
        Ok(User {
            id,
            email: email.to_string(),
            name: name.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("user", id))?;
        row_to_user(&row)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE email = ?1"),
                [email],
            )
            .await?;
        rows.next().await?.map(|row| row_to_user(&row)).transpose()
    }

    /// Return the user with `email`, creating it on first use.
    pub async fn ensure_user(&self, email: &str, name: Option<&str>) -> Result<User, DatabaseError> {
        match self.find_user_by_email(email).await? {
            Some(user) => Ok(user),
            None => self.create_user(email, name).await,
        }
    }
}
