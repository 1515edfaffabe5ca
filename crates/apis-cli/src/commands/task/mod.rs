mod create;
mod list;
mod update;

use apis_core::responses::OverdueSweep;
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `apis task`.
///
/// Every task command acts on behalf of the configured user.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create {
            title,
            due,
            description,
            task_type,
            reminder,
            hive,
            apiary,
            priority,
            notes,
        } => {
            create::run(
                create::Params {
                    title: title.clone(),
                    due: due.clone(),
                    description: description.clone(),
                    task_type: task_type.clone(),
                    reminder: reminder.clone(),
                    hive: hive.clone(),
                    apiary: apiary.clone(),
                    priority: priority.clone(),
                    notes: notes.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Update {
            id,
            title,
            description,
            task_type,
            due,
            status,
            priority,
            hive,
            apiary,
            notes,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                    task_type: task_type.clone(),
                    due: due.clone(),
                    status: status.clone(),
                    priority: priority.clone(),
                    hive: hive.clone(),
                    apiary: apiary.clone(),
                    notes: notes.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::List {
            status,
            hive,
            apiary,
            open,
            overdue,
            upcoming,
            limit,
        } => {
            let view = list::View::from_flags(
                status.as_deref(),
                hive.as_deref(),
                apiary.as_deref(),
                *open,
                *overdue,
                *upcoming,
            )?;
            list::run(view, *limit, ctx, flags).await
        }
        TaskCommands::Get { id } => {
            let task = ctx.service.get_task_for_user(&ctx.user_id, id).await?;
            output(&task, flags.format)
        }
        TaskCommands::Complete { id } => {
            let task = ctx
                .service
                .complete_task(&ctx.user_id, id, Utc::now())
                .await?;
            output(&task, flags.format)
        }
        TaskCommands::MarkOverdue => {
            let marked = ctx
                .service
                .mark_overdue_tasks(&ctx.user_id, Utc::now())
                .await?;
            output(&OverdueSweep { marked }, flags.format)
        }
        TaskCommands::Delete { id } => {
            ctx.service.delete_task(&ctx.user_id, id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
