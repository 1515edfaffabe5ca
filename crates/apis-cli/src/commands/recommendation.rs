use apis_core::enums::Priority;
use apis_core::inputs::NewRecommendation;
use apis_db::updates::recommendation::RecommendationUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RecommendationCommands;
use crate::commands::shared::parse::{parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `apis recommendation`.
pub async fn handle(
    action: &RecommendationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RecommendationCommands::Create {
            hive,
            recommendation_type,
            title,
            description,
            priority,
        } => {
            let input = NewRecommendation {
                hive_id: hive.clone(),
                recommendation_type: parse_enum(recommendation_type, "type")?,
                title: title.clone(),
                description: description.clone(),
                priority: parse_opt_enum(priority.as_deref(), "priority")?
                    .unwrap_or(Priority::Medium),
            };
            let recommendation = ctx.service.create_recommendation(&input).await?;
            output(&recommendation, flags.format)
        }
        RecommendationCommands::Update {
            id,
            recommendation_type,
            title,
            description,
            priority,
        } => {
            if recommendation_type.is_none()
                && title.is_none()
                && description.is_none()
                && priority.is_none()
            {
                anyhow::bail!(
                    "At least one of --type, --title, --description, or --priority must be provided"
                );
            }
            let mut builder = RecommendationUpdateBuilder::new();
            if let Some(recommendation_type) = recommendation_type {
                builder = builder.recommendation_type(parse_enum(recommendation_type, "type")?);
            }
            if let Some(title) = title {
                builder = builder.title(title.as_str());
            }
            if let Some(description) = description {
                builder = builder.description(description.as_str());
            }
            if let Some(priority) = priority {
                builder = builder.priority(parse_enum(priority, "priority")?);
            }
            let recommendation = ctx.service.update_recommendation(id, builder.build()).await?;
            output(&recommendation, flags.format)
        }
        RecommendationCommands::List { hive } => {
            let recommendations = ctx.service.list_recommendations_for_hive(hive).await?;
            output(&recommendations, flags.format)
        }
        RecommendationCommands::Get { id } => {
            let recommendation = ctx.service.get_recommendation(id).await?;
            output(&recommendation, flags.format)
        }
        RecommendationCommands::Delete { id } => {
            ctx.service.delete_recommendation(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
