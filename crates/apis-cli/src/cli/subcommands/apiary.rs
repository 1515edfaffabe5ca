use clap::Subcommand;

/// Apiary entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ApiaryCommands {
    /// Create an apiary.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        longitude: Option<f64>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Update an apiary.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        longitude: Option<f64>,
        #[arg(long)]
        status: Option<String>,
    },
    /// List apiaries.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an apiary with its hives.
    Get { id: String },
    /// Delete an apiary and everything in it.
    Delete { id: String },
}
