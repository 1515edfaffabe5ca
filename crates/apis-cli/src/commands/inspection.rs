use apis_core::inputs::NewInspection;
use apis_db::updates::inspection::{InspectionUpdate, InspectionUpdateBuilder};
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{InspectionCommands, InspectionCreateArgs, InspectionUpdateArgs};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_datetime, parse_enum, parse_opt_datetime, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `apis inspection`.
pub async fn handle(
    action: &InspectionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InspectionCommands::Create(args) => {
            let input = build_inspection(args, &ctx.user_id)?;
            let inspection = ctx.service.create_inspection(&input).await?;
            output(&inspection, flags.format)
        }
        InspectionCommands::Update(args) => {
            let update = build_update(args)?;
            let inspection = ctx
                .service
                .update_inspection(&ctx.user_id, &args.id, update)
                .await?;
            output(&inspection, flags.format)
        }
        InspectionCommands::List { hive, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let inspections = match hive {
                Some(hive) => ctx.service.list_inspections_for_hive(hive, limit).await?,
                None => {
                    ctx.service
                        .list_recent_inspections(&ctx.user_id, limit)
                        .await?
                }
            };
            output(&inspections, flags.format)
        }
        InspectionCommands::Latest { hive } => {
            let inspection = ctx
                .service
                .latest_inspection_for_hive(&ctx.user_id, hive)
                .await?;
            output(&inspection, flags.format)
        }
        InspectionCommands::Get { id } => {
            let inspection = ctx.service.get_inspection_for_user(&ctx.user_id, id).await?;
            output(&inspection, flags.format)
        }
        InspectionCommands::Delete { id } => {
            ctx.service.delete_inspection(&ctx.user_id, id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

/// Start from a routine inspection and apply every observation given.
fn build_inspection(args: &InspectionCreateArgs, user_id: &str) -> anyhow::Result<NewInspection> {
    let date = parse_opt_datetime(args.date.as_deref(), "date")?.unwrap_or_else(Utc::now);
    let mut input = NewInspection::routine(&args.hive, user_id, date);

    input.duration_minutes = args.duration;
    input.queen_seen = !args.queen_not_seen;
    input.queen_marked = args.queen_marked;
    input.varroa_mites_detected = args.varroa;
    input.pests_notes.clone_from(&args.pests);
    input.notes.clone_from(&args.notes);
    input.next_inspection_date = parse_opt_datetime(args.next.as_deref(), "next")?;

    if let Some(description) = &args.disease {
        input.disease_detected = true;
        input.disease_description = Some(description.clone()).filter(|d| !d.trim().is_empty());
    }
    if let Some(cells) = parse_opt_enum(args.queen_cells.as_deref(), "queen-cells")? {
        input.queen_cells = cells;
    }
    if let Some(brood) = parse_opt_enum(args.brood.as_deref(), "brood")? {
        input.brood_pattern = brood;
    }
    if let Some(temperament) = parse_opt_enum(args.temperament.as_deref(), "temperament")? {
        input.temperament = temperament;
    }
    if let Some(population) = parse_opt_enum(args.population.as_deref(), "population")? {
        input.population = population;
    }
    if let Some(health) = parse_opt_enum(args.health.as_deref(), "health")? {
        input.health_status = health;
    }
    if let Some(honey) = parse_opt_enum(args.honey.as_deref(), "honey")? {
        input.honey_stores = honey;
    }
    if let Some(pollen) = parse_opt_enum(args.pollen.as_deref(), "pollen")? {
        input.pollen_stores = pollen;
    }
    Ok(input)
}

/// Collect the given fields into an update. Fails when nothing was given.
fn build_update(args: &InspectionUpdateArgs) -> anyhow::Result<InspectionUpdate> {
    let mut builder = InspectionUpdateBuilder::new();
    let mut touched = false;

    if let Some(date) = args.date.as_deref() {
        builder = builder.inspection_date(parse_datetime(date, "date")?);
        touched = true;
    }
    if let Some(minutes) = args.duration {
        builder = builder.duration_minutes(Some(minutes));
        touched = true;
    }
    if let Some(seen) = args.queen_seen {
        builder = builder.queen_seen(seen);
        touched = true;
    }
    if let Some(marked) = args.queen_marked {
        builder = builder.queen_marked(marked);
        touched = true;
    }
    if let Some(cells) = args.queen_cells.as_deref() {
        builder = builder.queen_cells(parse_enum(cells, "queen-cells")?);
        touched = true;
    }
    if let Some(brood) = args.brood.as_deref() {
        builder = builder.brood_pattern(parse_enum(brood, "brood")?);
        touched = true;
    }
    if let Some(temperament) = args.temperament.as_deref() {
        builder = builder.temperament(parse_enum(temperament, "temperament")?);
        touched = true;
    }
    if let Some(population) = args.population.as_deref() {
        builder = builder.population(parse_enum(population, "population")?);
        touched = true;
    }
    if let Some(health) = args.health.as_deref() {
        builder = builder.health_status(parse_enum(health, "health")?);
        touched = true;
    }
    if let Some(varroa) = args.varroa {
        builder = builder.varroa_mites_detected(varroa);
        touched = true;
    }
    if let Some(disease) = args.disease {
        builder = builder.disease_detected(disease);
        touched = true;
    }
    if let Some(description) = &args.disease_description {
        builder = builder.disease_description(non_empty(description));
        touched = true;
    }
    if let Some(pests) = &args.pests {
        builder = builder.pests_notes(non_empty(pests));
        touched = true;
    }
    if let Some(honey) = args.honey.as_deref() {
        builder = builder.honey_stores(parse_enum(honey, "honey")?);
        touched = true;
    }
    if let Some(pollen) = args.pollen.as_deref() {
        builder = builder.pollen_stores(parse_enum(pollen, "pollen")?);
        touched = true;
    }
    if let Some(notes) = &args.notes {
        builder = builder.notes(non_empty(notes));
        touched = true;
    }
    if let Some(next) = args.next.as_deref() {
        let next = if next.is_empty() {
            None
        } else {
            Some(parse_datetime(next, "next")?)
        };
        builder = builder.next_inspection_date(next);
        touched = true;
    }

    if !touched {
        anyhow::bail!("At least one field to update must be provided");
    }
    Ok(builder.build())
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|v| !v.is_empty())
}
