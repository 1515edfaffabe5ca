use clap::Subcommand;

/// Recommendation entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RecommendationCommands {
    /// Create a recommendation for a hive.
    Create {
        #[arg(long)]
        hive: String,
        #[arg(long = "type")]
        recommendation_type: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        priority: Option<String>,
    },
    /// Update a recommendation.
    Update {
        id: String,
        #[arg(long = "type")]
        recommendation_type: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },
    /// List recommendations for a hive, highest priority first.
    List {
        #[arg(long)]
        hive: String,
    },
    /// Get a recommendation by ID.
    Get { id: String },
    /// Delete a recommendation.
    Delete { id: String },
}
