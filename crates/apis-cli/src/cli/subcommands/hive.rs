use clap::Subcommand;

/// Hive entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HiveCommands {
    /// Create a hive.
    Create {
        #[arg(long)]
        apiary: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        strength: Option<String>,
        #[arg(long)]
        queen: Option<String>,
        #[arg(long)]
        temperament: Option<String>,
        #[arg(long)]
        honey: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Update a hive.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        apiary: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        strength: Option<String>,
        #[arg(long)]
        queen: Option<String>,
        #[arg(long)]
        temperament: Option<String>,
        #[arg(long)]
        honey: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// List hives.
    List {
        #[arg(long)]
        apiary: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a hive with recent inspections, open tasks, and recommendations.
    Get { id: String },
    /// Delete a hive.
    Delete { id: String },
}
