use clap::Subcommand;

/// Alert entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AlertCommands {
    /// Create an alert by hand.
    Create {
        #[arg(long = "type")]
        alert_type: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        severity: String,
        /// Affected hive (repeatable)
        #[arg(long)]
        hive: Vec<String>,
    },
    /// List active alerts.
    List {
        /// Include dismissed alerts, newest first
        #[arg(long)]
        all: bool,
    },
    /// Get an alert by ID.
    Get { id: String },
    /// Dismiss an alert.
    Dismiss { id: String },
}
