use apis_core::inputs::NewAlert;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AlertCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `apis alert`.
pub async fn handle(action: &AlertCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AlertCommands::Create {
            alert_type,
            title,
            message,
            severity,
            hive,
        } => {
            let input = NewAlert {
                alert_type: parse_enum(alert_type, "type")?,
                title: title.clone(),
                message: message.clone(),
                severity: parse_enum(severity, "severity")?,
                hive_ids: hive.clone(),
            };
            let alert = ctx.service.create_alert(&input).await?;
            output(&alert, flags.format)
        }
        AlertCommands::List { all } => {
            let alerts = if *all {
                let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
                ctx.service.list_alerts(limit).await?
            } else {
                ctx.service.list_active_alerts().await?
            };
            output(&alerts, flags.format)
        }
        AlertCommands::Get { id } => {
            let alert = ctx.service.get_alert(id).await?;
            output(&alert, flags.format)
        }
        AlertCommands::Dismiss { id } => {
            let alert = ctx.service.dismiss_alert(id).await?;
            output(&alert, flags.format)
        }
    }
}
