use apis_core::inputs::NewTask;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_datetime, parse_opt_datetime, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub due: String,
    pub description: Option<String>,
    pub task_type: Option<String>,
    pub reminder: Option<String>,
    pub hive: Option<String>,
    pub apiary: Option<String>,
    pub priority: Option<String>,
    pub notes: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = build_task(params, &ctx.user_id)?;
    let task = ctx.service.create_task(&input).await?;
    output(&task, flags.format)
}

fn build_task(params: Params, user_id: &str) -> anyhow::Result<NewTask> {
    let due = parse_datetime(&params.due, "due")?;
    let mut input = NewTask::new(&params.title, user_id, due);
    input.description = params.description;
    input.reminder_date = parse_opt_datetime(params.reminder.as_deref(), "reminder")?;
    input.hive_id = params.hive;
    input.apiary_id = params.apiary;
    input.notes = params.notes;
    if let Some(task_type) = parse_opt_enum(params.task_type.as_deref(), "type")? {
        input.task_type = task_type;
    }
    if let Some(priority) = parse_opt_enum(params.priority.as_deref(), "priority")? {
        input.priority = priority;
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use apis_core::enums::{TaskPriority, TaskType};

    use super::{Params, build_task};

    fn params() -> Params {
        Params {
            title: String::from("Feed syrup"),
            due: String::from("2025-09-20"),
            description: None,
            task_type: None,
            reminder: None,
            hive: None,
            apiary: None,
            priority: None,
            notes: None,
        }
    }

    #[test]
    fn minimal_task_uses_defaults() {
        let task = build_task(params(), "usr-1").expect("should build");
        assert_eq!(task.task_type, TaskType::General);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.user_id, "usr-1");
    }

    #[test]
    fn typed_fields_parse() {
        let task = build_task(
            Params {
                task_type: Some(String::from("feeding")),
                priority: Some(String::from("high")),
                hive: Some(String::from("hiv-00000001")),
                ..params()
            },
            "usr-1",
        )
        .expect("should build");
        assert_eq!(task.task_type, TaskType::Feeding);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.hive_id.as_deref(), Some("hiv-00000001"));
    }

    #[test]
    fn bad_due_date_fails() {
        let err = build_task(
            Params {
                due: String::from("soon"),
                ..params()
            },
            "usr-1",
        )
        .err()
        .expect("should fail");
        assert!(err.to_string().contains("invalid due"));
    }
}
