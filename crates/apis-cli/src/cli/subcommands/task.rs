use clap::Subcommand;

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task.
    Create {
        #[arg(long)]
        title: String,
        /// Due date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        due: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "type")]
        task_type: Option<String>,
        #[arg(long)]
        reminder: Option<String>,
        #[arg(long)]
        hive: Option<String>,
        #[arg(long)]
        apiary: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update a task.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "type")]
        task_type: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        hive: Option<String>,
        #[arg(long)]
        apiary: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List tasks for the acting user.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long, conflicts_with_all = ["apiary", "status"])]
        hive: Option<String>,
        #[arg(long, conflicts_with = "status")]
        apiary: Option<String>,
        /// Only pending, in-progress, and overdue tasks
        #[arg(long, conflicts_with_all = ["overdue", "upcoming", "status"])]
        open: bool,
        /// Only active tasks past their due date
        #[arg(long, conflicts_with_all = ["upcoming", "status"])]
        overdue: bool,
        /// Only active tasks due within this many days
        #[arg(long, conflicts_with = "status")]
        upcoming: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Mark a task completed.
    Complete { id: String },
    /// Move pending tasks past their due date to OVERDUE.
    MarkOverdue,
    /// Delete a task.
    Delete { id: String },
}
