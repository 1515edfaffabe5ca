use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AlertCommands, ApiaryCommands, HiveCommands, InspectionCommands, RecommendationCommands,
    TaskCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize apis for a project directory.
    Init(InitArgs),
    /// Run the advisor and print active alerts.
    Advise(AdviseArgs),
    /// Apiaries.
    Apiary {
        #[command(subcommand)]
        action: ApiaryCommands,
    },
    /// Hives.
    Hive {
        #[command(subcommand)]
        action: HiveCommands,
    },
    /// Inspections.
    Inspection {
        #[command(subcommand)]
        action: InspectionCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Alerts.
    Alert {
        #[command(subcommand)]
        action: AlertCommands,
    },
    /// Recommendations.
    Recommendation {
        #[command(subcommand)]
        action: RecommendationCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory)
    pub path: Option<String>,
    /// Email of the acting user (defaults to `general.user_email`)
    #[arg(long)]
    pub email: Option<String>,
    /// Display name of the acting user
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AdviseArgs {
    /// Override `advisor.dedup` for this run: none, same_day
    #[arg(long)]
    pub dedup: Option<String>,
    /// Evaluate as of this instant (RFC 3339 or YYYY-MM-DD) instead of now
    #[arg(long)]
    pub at: Option<String>,
}
