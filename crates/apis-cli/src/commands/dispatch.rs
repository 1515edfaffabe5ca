use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Advise(args) => commands::advise::handle(&args, ctx, flags).await,
        Commands::Apiary { action } => commands::apiary::handle(&action, ctx, flags).await,
        Commands::Hive { action } => commands::hive::handle(&action, ctx, flags).await,
        Commands::Inspection { action } => commands::inspection::handle(&action, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Alert { action } => commands::alert::handle(&action, ctx, flags).await,
        Commands::Recommendation { action } => {
            commands::recommendation::handle(&action, ctx, flags).await
        }
        Commands::Init(_) => unreachable!("init is pre-dispatched in main"),
    }
}
