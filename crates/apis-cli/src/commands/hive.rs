use apis_core::enums::{ColonyStrength, HiveStatus, HiveTemperament, HoneyStores, QueenStatus};
use apis_core::inputs::NewHive;
use apis_db::updates::hive::HiveUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HiveCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Inspections shown by `apis hive get`.
const RECENT_INSPECTIONS: u32 = 5;

/// Handle `apis hive`.
pub async fn handle(action: &HiveCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        HiveCommands::Create {
            apiary,
            name,
            status,
            strength,
            queen,
            temperament,
            honey,
            image_url,
        } => {
            let mut input = NewHive::named(name, apiary);
            if let Some(status) = parse_opt_enum::<HiveStatus>(status.as_deref(), "status")? {
                input.status = status;
            }
            if let Some(strength) = parse_opt_enum::<ColonyStrength>(strength.as_deref(), "strength")? {
                input.colony_strength = strength;
            }
            if let Some(queen) = parse_opt_enum::<QueenStatus>(queen.as_deref(), "queen")? {
                input.queen_status = queen;
            }
            if let Some(temperament) =
                parse_opt_enum::<HiveTemperament>(temperament.as_deref(), "temperament")?
            {
                input.temperament = temperament;
            }
            if let Some(honey) = parse_opt_enum::<HoneyStores>(honey.as_deref(), "honey")? {
                input.honey_stores = honey;
            }
            input.image_url.clone_from(image_url);

            let hive = ctx.service.create_hive(&input).await?;
            output(&hive, flags.format)
        }
        HiveCommands::Update {
            id,
            name,
            apiary,
            status,
            strength,
            queen,
            temperament,
            honey,
            image_url,
        } => {
            let mut builder = HiveUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name.as_str());
            }
            if let Some(apiary) = apiary {
                builder = builder.apiary_id(apiary.as_str());
            }
            if let Some(status) = status {
                builder = builder.status(parse_enum(status, "status")?);
            }
            if let Some(strength) = strength {
                builder = builder.colony_strength(parse_enum(strength, "strength")?);
            }
            if let Some(queen) = queen {
                builder = builder.queen_status(parse_enum(queen, "queen")?);
            }
            if let Some(temperament) = temperament {
                builder = builder.temperament(parse_enum(temperament, "temperament")?);
            }
            if let Some(honey) = honey {
                builder = builder.honey_stores(parse_enum(honey, "honey")?);
            }
            if let Some(url) = image_url {
                builder = builder.image_url(Some(url.clone()).filter(|u| !u.is_empty()));
            }
            let hive = ctx.service.update_hive(id, builder.build()).await?;
            output(&hive, flags.format)
        }
        HiveCommands::List { apiary, limit } => {
            let hives = if let Some(apiary_id) = apiary {
                ctx.service.list_hives_for_apiary(apiary_id).await?
            } else {
                let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
                ctx.service.list_hives(limit).await?
            };
            output(&hives, flags.format)
        }
        HiveCommands::Get { id } => {
            let detail = ctx.service.hive_detail(id, RECENT_INSPECTIONS).await?;
            output(&detail, flags.format)
        }
        HiveCommands::Delete { id } => {
            ctx.service.delete_hive(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
