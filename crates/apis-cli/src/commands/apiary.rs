use apis_core::enums::ApiaryStatus;
use apis_core::inputs::NewApiary;
use apis_core::responses::ApiaryDetail;
use apis_db::updates::apiary::ApiaryUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ApiaryCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `apis apiary`.
pub async fn handle(
    action: &ApiaryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ApiaryCommands::Create {
            name,
            location,
            latitude,
            longitude,
            status,
        } => {
            let input = NewApiary {
                name: name.clone(),
                location: location.clone(),
                latitude: *latitude,
                longitude: *longitude,
                status: parse_opt_enum(status.as_deref(), "status")?
                    .unwrap_or(ApiaryStatus::Healthy),
            };
            let apiary = ctx.service.create_apiary(&input).await?;
            output(&apiary, flags.format)
        }
        ApiaryCommands::Update {
            id,
            name,
            location,
            latitude,
            longitude,
            status,
        } => {
            let mut builder = ApiaryUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name.as_str());
            }
            if let Some(location) = location {
                builder = builder.location(location.as_str());
            }
            if latitude.is_some() || longitude.is_some() {
                let current = ctx.service.get_apiary(id).await?;
                builder = builder.coordinates(
                    latitude.or(current.latitude),
                    longitude.or(current.longitude),
                );
            }
            if let Some(status) = status {
                builder = builder.status(parse_enum::<ApiaryStatus>(status, "status")?);
            }
            let apiary = ctx.service.update_apiary(id, builder.build()).await?;
            output(&apiary, flags.format)
        }
        ApiaryCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let apiaries = ctx.service.list_apiaries(limit).await?;
            output(&apiaries, flags.format)
        }
        ApiaryCommands::Get { id } => {
            let detail = ApiaryDetail {
                apiary: ctx.service.get_apiary(id).await?,
                hives: ctx.service.list_hives_for_apiary(id).await?,
            };
            output(&detail, flags.format)
        }
        ApiaryCommands::Delete { id } => {
            ctx.service.delete_apiary(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
