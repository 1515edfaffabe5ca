//! Task repository: CRUD, status queries, and user ownership checks.
//!
//! User-scoped operations (`get_task_for_user`, `update_task`, `complete_task`,
//! `delete_task`) fail with `DatabaseError::Forbidden` when the task belongs to
//! someone else. `list_all_tasks` is the fact reader the advisor consumes.

use chrono::{DateTime, Duration, Utc};

use apis_core::entities::Task;
use apis_core::enums::TaskStatus;
use apis_core::ids::PREFIX_TASK;
use apis_core::inputs::NewTask;

use crate::error::DatabaseError;
use crate::helpers::{
    UpdateSet, format_datetime, get_opt_datetime, get_opt_string, nullable, parse_datetime,
    parse_enum,
};
use crate::service::ApisService;
use crate::updates::task::TaskUpdate;

const SELECT_COLS: &str = "id, title, description, task_type, due_date, reminder_date, \
     hive_id, apiary_id, user_id, status, priority, completed_date, notes, created_at, updated_at";

/// Statuses that still need doing.
const OPEN_STATUSES: &str = "('PENDING', 'IN_PROGRESS', 'OVERDUE')";

/// Statuses that count as overdue once past their due date.
const ACTIVE_STATUSES: &str = "('PENDING', 'IN_PROGRESS')";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        task_type: parse_enum(&row.get::<String>(3)?)?,
        due_date: parse_datetime(&row.get::<String>(4)?)?,
        reminder_date: get_opt_datetime(row, 5)?,
        hive_id: get_opt_string(row, 6)?,
        apiary_id: get_opt_string(row, 7)?,
        user_id: row.get(8)?,
        status: parse_enum(&row.get::<String>(9)?)?,
        priority: parse_enum(&row.get::<String>(10)?)?,
        completed_date: get_opt_datetime(row, 11)?,
        notes: get_opt_string(row, 12)?,
        created_at: parse_datetime(&row.get::<String>(13)?)?,
        updated_at: parse_datetime(&row.get::<String>(14)?)?,
    })
}

impl ApisService {
    async fn query_tasks(
        &self,
        where_order: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<Task>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks {where_order}"),
                libsql::params_from_iter(params),
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Create a task. New tasks always start `PENDING`.
    pub async fn create_task(&self, input: &NewTask) -> Result<Task, DatabaseError> {
        input.validate()?;
        self.get_user(&input.user_id).await?;
        if let Some(ref hive_id) = input.hive_id {
            self.get_hive(hive_id).await?;
        }
        if let Some(ref apiary_id) = input.apiary_id {
            self.get_apiary(apiary_id).await?;
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TASK).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO tasks ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)"
                ),
                libsql::params_from_iter(vec![
                    libsql::Value::from(id.as_str()),
                    input.title.as_str().into(),
                    nullable(input.description.as_deref()),
                    input.task_type.as_str().into(),
                    format_datetime(input.due_date).into(),
                    nullable(input.reminder_date.map(format_datetime)),
                    nullable(input.hive_id.as_deref()),
                    nullable(input.apiary_id.as_deref()),
                    input.user_id.as_str().into(),
                    TaskStatus::Pending.as_str().into(),
                    input.priority.as_str().into(),
                    libsql::Value::Null,
                    nullable(input.notes.as_deref()),
                    format_datetime(now).into(),
                    format_datetime(now).into(),
                ]),
            )
            .await?;

        tracing::debug!(task_id = %id, user_id = %input.user_id, "task created");
        Ok(Task {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            task_type: input.task_type,
            due_date: input.due_date,
            reminder_date: input.reminder_date,
            hive_id: input.hive_id.clone(),
            apiary_id: input.apiary_id.clone(),
            user_id: input.user_id.clone(),
            status: TaskStatus::Pending,
            priority: input.priority,
            completed_date: None,
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, DatabaseError> {
        self.query_tasks("WHERE id = ?1", vec![id.into()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::not_found("task", id))
    }

    /// Fetch a task, checking that it belongs to `user_id`.
    pub async fn get_task_for_user(&self, user_id: &str, id: &str) -> Result<Task, DatabaseError> {
        let task = self.get_task(id).await?;
        if task.user_id != user_id {
            return Err(DatabaseError::Forbidden(format!(
                "task {id} belongs to another user"
            )));
        }
        Ok(task)
    }

    /// Every task, in creation order.
    ///
    /// A row that does not parse fails the whole read.
    pub async fn list_all_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        self.query_tasks("ORDER BY rowid", Vec::new()).await
    }

    pub async fn list_tasks_for_user(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<Task>, DatabaseError> {
        self.query_tasks(
            &format!("WHERE user_id = ?1 ORDER BY due_date LIMIT {limit}"),
            vec![user_id.into()],
        )
        .await
    }

    pub async fn list_tasks_by_status(
        &self,
        user_id: &str,
        status: TaskStatus,
    ) -> Result<Vec<Task>, DatabaseError> {
        self.query_tasks(
            "WHERE user_id = ?1 AND status = ?2 ORDER BY due_date",
            vec![user_id.into(), status.as_str().into()],
        )
        .await
    }

    pub async fn list_tasks_for_hive(&self, hive_id: &str) -> Result<Vec<Task>, DatabaseError> {
        self.query_tasks(
            "WHERE hive_id = ?1 ORDER BY due_date",
            vec![hive_id.into()],
        )
        .await
    }

    pub async fn list_tasks_for_apiary(&self, apiary_id: &str) -> Result<Vec<Task>, DatabaseError> {
        self.query_tasks(
            "WHERE apiary_id = ?1 ORDER BY due_date",
            vec![apiary_id.into()],
        )
        .await
    }

    /// Pending, in-progress, and overdue tasks ordered by due date.
    pub async fn list_open_tasks(&self, user_id: &str) -> Result<Vec<Task>, DatabaseError> {
        self.query_tasks(
            &format!("WHERE user_id = ?1 AND status IN {OPEN_STATUSES} ORDER BY due_date"),
            vec![user_id.into()],
        )
        .await
    }

    /// Active tasks due between `now` and `now + days`.
    pub async fn list_upcoming_tasks(
        &self,
        user_id: &str,
        days: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Task>, DatabaseError> {
        let until = now + Duration::days(i64::from(days));
        self.query_tasks(
            &format!(
                "WHERE user_id = ?1 AND status IN {ACTIVE_STATUSES} \
                 AND due_date >= ?2 AND due_date <= ?3 ORDER BY due_date"
            ),
            vec![
                user_id.into(),
                format_datetime(now).into(),
                format_datetime(until).into(),
            ],
        )
        .await
    }

    /// Active tasks whose due date has passed.
    pub async fn list_overdue_tasks(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Task>, DatabaseError> {
        self.query_tasks(
            &format!(
                "WHERE user_id = ?1 AND status IN {ACTIVE_STATUSES} AND due_date < ?2 \
                 ORDER BY due_date"
            ),
            vec![user_id.into(), format_datetime(now).into()],
        )
        .await
    }

    pub async fn update_task(
        &self,
        user_id: &str,
        task_id: &str,
        update: TaskUpdate,
    ) -> Result<Task, DatabaseError> {
        let current = self.get_task_for_user(user_id, task_id).await?;

        let mut set = UpdateSet::default();
        if let Some(title) = update.title {
            set.push("title", title);
        }
        if let Some(description) = update.description {
            set.push("description", nullable(description));
        }
        if let Some(task_type) = update.task_type {
            set.push("task_type", task_type.as_str());
        }
        if let Some(due_date) = update.due_date {
            set.push("due_date", format_datetime(due_date));
        }
        if let Some(reminder_date) = update.reminder_date {
            set.push("reminder_date", nullable(reminder_date.map(format_datetime)));
        }
        if let Some(hive_id) = update.hive_id {
            set.push("hive_id", nullable(hive_id));
        }
        if let Some(apiary_id) = update.apiary_id {
            set.push("apiary_id", nullable(apiary_id));
        }
        if let Some(status) = update.status {
            set.push("status", status.as_str());
            let completed = (status == TaskStatus::Completed)
                .then(|| current.completed_date.unwrap_or_else(Utc::now));
            set.push("completed_date", nullable(completed.map(format_datetime)));
        }
        if let Some(priority) = update.priority {
            set.push("priority", priority.as_str());
        }
        if let Some(notes) = update.notes {
            set.push("notes", nullable(notes));
        }

        if set.is_empty() {
            return Ok(current);
        }

        let (sql, params) = set.into_sql("tasks", task_id, Some(Utc::now()));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        self.get_task(task_id).await
    }

    /// Mark a task `COMPLETED` and record when.
    pub async fn complete_task(
        &self,
        user_id: &str,
        task_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Task, DatabaseError> {
        let current = self.get_task_for_user(user_id, task_id).await?;
        if current.status == TaskStatus::Cancelled {
            return Err(DatabaseError::InvalidState(format!(
                "task {task_id} is cancelled"
            )));
        }

        self.db()
            .conn()
            .execute(
                "UPDATE tasks SET status = ?1, completed_date = ?2, updated_at = ?2 WHERE id = ?3",
                libsql::params![TaskStatus::Completed.as_str(), format_datetime(now), task_id],
            )
            .await?;

        Ok(Task {
            status: TaskStatus::Completed,
            completed_date: Some(now),
            updated_at: now,
            ..current
        })
    }

    /// Flip the user's `PENDING` tasks past their due date to `OVERDUE`.
    ///
    /// Returns the number of tasks changed.
    pub async fn mark_overdue_tasks(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE tasks SET status = ?1, updated_at = ?2
                 WHERE user_id = ?3 AND status = ?4 AND due_date < ?2",
                libsql::params![
                    TaskStatus::Overdue.as_str(),
                    format_datetime(now),
                    user_id,
                    TaskStatus::Pending.as_str()
                ],
            )
            .await?;
        tracing::debug!(user_id, changed, "overdue tasks marked");
        Ok(changed)
    }

    pub async fn delete_task(&self, user_id: &str, task_id: &str) -> Result<(), DatabaseError> {
        self.get_task_for_user(user_id, task_id).await?;
        self.db()
            .conn()
            .execute("DELETE FROM tasks WHERE id = ?1", [task_id])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{test_apiary, test_hive, test_service, test_user};
    use crate::updates::task::TaskUpdateBuilder;
    use apis_core::enums::{TaskPriority, TaskType};
    use rstest::rstest;

    #[tokio::test]
    async fn create_task_roundtrip() {
        let svc = test_service().await;
        let user = test_user(&svc).await;
        let apiary = test_apiary(&svc).await;
        let hive = test_hive(&svc, &apiary.id, "A").await;

        let mut input = NewTask::new("Add a super", &user.id, Utc::now() + Duration::days(3));
        input.task_type = TaskType::AddBoxes;
        input.hive_id = Some(hive.id.clone());
        input.priority = TaskPriority::High;

        let task = svc.create_task(&input).await.unwrap();
        assert!(task.id.starts_with("tsk-"));
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(svc.get_task(&task.id).await.unwrap(), task);
        assert_eq!(svc.list_tasks_for_hive(&hive.id).await.unwrap(), vec![task]);
    }

    #[tokio::test]
    async fn other_users_tasks_are_forbidden() {
        let svc = test_service().await;
        let owner = test_user(&svc).await;
        let other = svc.create_user("other@example.invalid", None).await.unwrap();
        let task = svc
            .create_task(&NewTask::new("Feed", &owner.id, Utc::now()))
            .await
            .unwrap();

        assert!(matches!(
            svc.get_task_for_user(&other.id, &task.id).await,
            Err(DatabaseError::Forbidden(_))
        ));
        assert!(matches!(
            svc.complete_task(&other.id, &task.id, Utc::now()).await,
            Err(DatabaseError::Forbidden(_))
        ));
        assert!(matches!(
            svc.update_task(&other.id, &task.id, TaskUpdateBuilder::new().title("x").build())
                .await,
            Err(DatabaseError::Forbidden(_))
        ));
        assert!(matches!(
            svc.delete_task(&other.id, &task.id).await,
            Err(DatabaseError::Forbidden(_))
        ));
        assert!(svc.get_task(&task.id).await.is_ok());
    }

    #[tokio::test]
    async fn complete_task_sets_completed_date() {
        let svc = test_service().await;
        let user = test_user(&svc).await;
        let task = svc
            .create_task(&NewTask::new("Harvest", &user.id, Utc::now()))
            .await
            .unwrap();
        let now = Utc::now();

        let done = svc.complete_task(&user.id, &task.id, now).await.unwrap();
        assert_eq!(done.status, TaskStatus::Completed);
        assert_eq!(done.completed_date, Some(now));
        assert_eq!(svc.get_task(&task.id).await.unwrap(), done);
    }

    #[tokio::test]
    async fn status_queries() {
        let svc = test_service().await;
        let user = test_user(&svc).await;
        let now = Utc::now();

        let late = svc
            .create_task(&NewTask::new("Late", &user.id, now - Duration::days(3)))
            .await
            .unwrap();
        let soon = svc
            .create_task(&NewTask::new("Soon", &user.id, now + Duration::days(2)))
            .await
            .unwrap();
        let later = svc
            .create_task(&NewTask::new("Later", &user.id, now + Duration::days(20)))
            .await
            .unwrap();
        let done = svc
            .create_task(&NewTask::new("Done", &user.id, now - Duration::days(1)))
            .await
            .unwrap();
        svc.complete_task(&user.id, &done.id, now).await.unwrap();

        let ids = |tasks: Vec<Task>| tasks.into_iter().map(|t| t.id).collect::<Vec<_>>();

        assert_eq!(
            ids(svc.list_upcoming_tasks(&user.id, 7, now).await.unwrap()),
            vec![soon.id.clone()]
        );
        assert_eq!(
            ids(svc.list_overdue_tasks(&user.id, now).await.unwrap()),
            vec![late.id.clone()]
        );
        assert_eq!(
            ids(svc.list_open_tasks(&user.id).await.unwrap()),
            vec![late.id.clone(), soon.id.clone(), later.id.clone()]
        );
        assert_eq!(
            ids(svc.list_tasks_by_status(&user.id, TaskStatus::Completed).await.unwrap()),
            vec![done.id.clone()]
        );
        assert_eq!(svc.list_tasks_for_user(&user.id, 2).await.unwrap().len(), 2);
        assert_eq!(
            ids(svc.list_all_tasks().await.unwrap()),
            vec![late.id, soon.id, later.id, done.id]
        );
    }

    #[tokio::test]
    async fn mark_overdue_only_touches_pending_past_due() {
        let svc = test_service().await;
        let user = test_user(&svc).await;
        let now = Utc::now();

        let late = svc
            .create_task(&NewTask::new("Late", &user.id, now - Duration::days(1)))
            .await
            .unwrap();
        let busy = svc
            .create_task(&NewTask::new("Busy", &user.id, now - Duration::days(1)))
            .await
            .unwrap();
        svc.update_task(
            &user.id,
            &busy.id,
            TaskUpdateBuilder::new().status(TaskStatus::InProgress).build(),
        )
        .await
        .unwrap();
        svc.create_task(&NewTask::new("Future", &user.id, now + Duration::days(1)))
            .await
            .unwrap();

        assert_eq!(svc.mark_overdue_tasks(&user.id, now).await.unwrap(), 1);
        assert_eq!(
            svc.get_task(&late.id).await.unwrap().status,
            TaskStatus::Overdue
        );
        assert_eq!(
            svc.get_task(&busy.id).await.unwrap().status,
            TaskStatus::InProgress
        );
        assert_eq!(svc.mark_overdue_tasks(&user.id, now).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_task_partial() {
        let svc = test_service().await;
        let user = test_user(&svc).await;
        let task = svc
            .create_task(&NewTask::new("Original", &user.id, Utc::now()))
            .await
            .unwrap();

        let update = TaskUpdateBuilder::new()
            .title("Updated")
            .notes(Some("bring smoker".into()))
            .status(TaskStatus::Completed)
            .build();
        let updated = svc.update_task(&user.id, &task.id, update).await.unwrap();
        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.notes.as_deref(), Some("bring smoker"));
        assert!(updated.completed_date.is_some());
        assert_eq!(updated.due_date, task.due_date);
    }

    #[tokio::test]
    async fn delete_task_removes_it() {
        let svc = test_service().await;
        let user = test_user(&svc).await;
        let task = svc
            .create_task(&NewTask::new("Gone", &user.id, Utc::now()))
            .await
            .unwrap();

        svc.delete_task(&user.id, &task.id).await.unwrap();
        assert!(matches!(
            svc.get_task(&task.id).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }

    #[rstest]
    #[case::due_now(0, 7, true)]
    #[case::inside_window(3, 7, true)]
    #[case::window_edge(7, 7, true)]
    #[case::past_window(8, 7, false)]
    #[case::zero_day_window(1, 0, false)]
    #[tokio::test]
    async fn upcoming_window_bounds(#[case] due_in: i64, #[case] days: u32, #[case] listed: bool) {
        let svc = test_service().await;
        let user = test_user(&svc).await;
        let now = Utc::now();
        svc.create_task(&NewTask::new("Split colony", &user.id, now + Duration::days(due_in)))
            .await
            .unwrap();

        let upcoming = svc.list_upcoming_tasks(&user.id, days, now).await.unwrap();
        assert_eq!(upcoming.len() == 1, listed);
    }
}
