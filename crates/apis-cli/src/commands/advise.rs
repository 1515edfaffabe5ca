use anyhow::Context;
use apis_core::enums::DedupPolicy;
use chrono::Utc;

use crate::cli::root_commands::AdviseArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_opt_datetime;
use crate::context::AppContext;
use crate::output::{output, render_list};

/// Handle `apis advise`.
///
/// Runs one advisor pass and prints the report. The table view prints a
/// one-line summary followed by the alert rows.
pub async fn handle(args: &AdviseArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = parse_opt_datetime(args.at.as_deref(), "at")?.unwrap_or_else(Utc::now);

    let report = match args.dedup.as_deref() {
        Some(raw) => {
            ctx.service
                .run_advisor_with_policy(now, parse_dedup(raw)?)
                .await?
        }
        None => ctx.service.run_advisor_at(now).await?,
    };

    if flags.format == OutputFormat::Table {
        if !flags.quiet {
            println!(
                "{} existing, {} generated, {} suppressed",
                report.existing, report.generated, report.suppressed
            );
        }
        println!("{}", render_list(&report.alerts)?);
        return Ok(());
    }

    output(&report, flags.format)
}

fn parse_dedup(raw: &str) -> anyhow::Result<DedupPolicy> {
    let normalized = raw.trim().replace('-', "_").to_ascii_lowercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .with_context(|| format!("invalid dedup '{raw}': expected none or same_day"))
}

#[cfg(test)]
mod tests {
    use apis_core::enums::DedupPolicy;

    use super::parse_dedup;

    #[test]
    fn dedup_accepts_either_separator() {
        assert_eq!(parse_dedup("same-day").expect("should parse"), DedupPolicy::SameDay);
        assert_eq!(parse_dedup("SAME_DAY").expect("should parse"), DedupPolicy::SameDay);
        assert_eq!(parse_dedup("none").expect("should parse"), DedupPolicy::None);
    }

    #[test]
    fn dedup_rejects_unknown_policy() {
        assert!(parse_dedup("hourly").is_err());
    }
}
