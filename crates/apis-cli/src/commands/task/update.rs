use apis_db::updates::task::TaskUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_datetime, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub task_type: Option<String>,
    pub due: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub hive: Option<String>,
    pub apiary: Option<String>,
    pub notes: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = params.description {
        builder = builder.description(non_empty(description));
    }
    if let Some(task_type) = params.task_type.as_deref() {
        builder = builder.task_type(parse_enum(task_type, "type")?);
    }
    if let Some(due) = params.due.as_deref() {
        builder = builder.due_date(parse_datetime(due, "due")?);
    }
    if let Some(status) = params.status.as_deref() {
        builder = builder.status(parse_enum(status, "status")?);
    }
    if let Some(priority) = params.priority.as_deref() {
        builder = builder.priority(parse_enum(priority, "priority")?);
    }
    if let Some(hive) = params.hive {
        builder = builder.hive_id(non_empty(hive));
    }
    if let Some(apiary) = params.apiary {
        builder = builder.apiary_id(non_empty(apiary));
    }
    if let Some(notes) = params.notes {
        builder = builder.notes(non_empty(notes));
    }

    let task = ctx
        .service
        .update_task(&ctx.user_id, &params.id, builder.build())
        .await?;
    output(&task, flags.format)
}

/// An empty argument clears a nullable field.
fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.description.is_none()
        && params.task_type.is_none()
        && params.due.is_none()
        && params.status.is_none()
        && params.priority.is_none()
        && params.hive.is_none()
        && params.apiary.is_none()
        && params.notes.is_none()
    {
        anyhow::bail!(
            "At least one of --title, --description, --type, --due, --status, --priority, --hive, --apiary, or --notes must be provided"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Params, non_empty, validate_update_params};

    fn empty() -> Params {
        Params {
            id: String::from("tsk-1"),
            title: None,
            description: None,
            task_type: None,
            due: None,
            status: None,
            priority: None,
            hive: None,
            apiary: None,
            notes: None,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(validate_update_params(&empty()).is_err());
    }

    #[test]
    fn accepts_update_with_any_field() {
        let params = Params {
            notes: Some(String::from("moved to orchard")),
            ..empty()
        };
        assert!(validate_update_params(&params).is_ok());
    }

    #[test]
    fn empty_value_clears() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty(String::from("x")).as_deref(), Some("x"));
    }
}
