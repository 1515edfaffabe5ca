use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `apis` binary.
#[derive(Debug, Parser)]
#[command(name = "apis", version, about = "apis - beekeeping records and hive advisories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .apis)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AlertCommands, TaskCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "apis", "--format", "table", "--limit", "10", "--verbose", "advise",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Advise(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["apis", "alert", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Alert {
                action: AlertCommands::List { all: false }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["apis", "--format", "xml", "advise"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn task_list_filters_parse() {
        let cli = Cli::try_parse_from(["apis", "task", "list", "--upcoming", "7"])
            .expect("cli should parse");
        let Commands::Task {
            action: TaskCommands::List { upcoming, overdue, .. },
        } = cli.command
        else {
            panic!("expected task list");
        };
        assert_eq!(upcoming, Some(7));
        assert!(!overdue);
    }

    #[test]
    fn task_list_view_flags_conflict() {
        let parsed = Cli::try_parse_from(["apis", "task", "list", "--open", "--overdue"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn alert_create_takes_repeated_hives() {
        let cli = Cli::try_parse_from([
            "apis", "alert", "create", "--type", "weather", "--title", "Frost", "--message",
            "Wrap hives", "--severity", "warning", "--hive", "hiv-00000001", "--hive",
            "hiv-00000002",
        ])
        .expect("cli should parse");
        let Commands::Alert {
            action: AlertCommands::Create { hive, .. },
        } = cli.command
        else {
            panic!("expected alert create");
        };
        assert_eq!(hive, vec!["hiv-00000001", "hiv-00000002"]);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["apis", "--project", "/tmp/yard", "advise"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/yard"));
    }
}
