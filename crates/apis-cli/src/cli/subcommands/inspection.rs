use clap::{Args, Subcommand};

/// Inspection entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InspectionCommands {
    /// Record an inspection.
    Create(InspectionCreateArgs),
    /// Change recorded observations.
    Update(InspectionUpdateArgs),
    /// List inspections, newest first: one hive's, or your most recent.
    List {
        #[arg(long)]
        hive: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show the newest inspection of a hive.
    Latest {
        #[arg(long)]
        hive: String,
    },
    /// Get an inspection by ID.
    Get { id: String },
    /// Delete an inspection.
    Delete { id: String },
}

/// Observations for `apis inspection create`. Omitted fields take the
/// values of an uneventful inspection.
#[derive(Clone, Debug, Args)]
pub struct InspectionCreateArgs {
    #[arg(long)]
    pub hive: String,
    /// Inspection time (RFC 3339 or YYYY-MM-DD, defaults to now)
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub duration: Option<u32>,
    /// The queen was not seen
    #[arg(long)]
    pub queen_not_seen: bool,
    #[arg(long)]
    pub queen_marked: bool,
    #[arg(long)]
    pub queen_cells: Option<String>,
    #[arg(long)]
    pub brood: Option<String>,
    #[arg(long)]
    pub temperament: Option<String>,
    #[arg(long)]
    pub population: Option<String>,
    #[arg(long)]
    pub health: Option<String>,
    /// Varroa mites were found
    #[arg(long)]
    pub varroa: bool,
    /// Disease was found; the value describes it
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub disease: Option<String>,
    #[arg(long)]
    pub pests: Option<String>,
    #[arg(long)]
    pub honey: Option<String>,
    #[arg(long)]
    pub pollen: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Planned next inspection (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub next: Option<String>,
}

/// Fields for `apis inspection update`. An empty text value clears the field.
#[derive(Clone, Debug, Args)]
pub struct InspectionUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub duration: Option<u32>,
    #[arg(long)]
    pub queen_seen: Option<bool>,
    #[arg(long)]
    pub queen_marked: Option<bool>,
    #[arg(long)]
    pub queen_cells: Option<String>,
    #[arg(long)]
    pub brood: Option<String>,
    #[arg(long)]
    pub temperament: Option<String>,
    #[arg(long)]
    pub population: Option<String>,
    #[arg(long)]
    pub health: Option<String>,
    #[arg(long)]
    pub varroa: Option<bool>,
    #[arg(long)]
    pub disease: Option<bool>,
    #[arg(long)]
    pub disease_description: Option<String>,
    #[arg(long)]
    pub pests: Option<String>,
    #[arg(long)]
    pub honey: Option<String>,
    #[arg(long)]
    pub pollen: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub next: Option<String>,
}
