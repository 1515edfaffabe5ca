//! Terminal preferences for table output, resolved once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::output::table::TableStyle;

/// Terminals narrower than this get unfitted tables.
const MIN_FIT_WIDTH: usize = 40;

static STYLE: OnceLock<TableStyle> = OnceLock::new();

/// What the process environment says about the terminal.
#[derive(Clone, Copy, Debug)]
struct Terminal<'a> {
    stdout_tty: bool,
    no_color: bool,
    columns: Option<&'a str>,
}

fn resolve(flags: &GlobalFlags, term: Terminal<'_>) -> TableStyle {
    let table = flags.format == OutputFormat::Table;
    let color = table
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => term.stdout_tty && !term.no_color && !flags.quiet,
        };
    let max_width = term
        .columns
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_FIT_WIDTH);

    TableStyle { color, max_width }
}

/// Record the table style for this run. Later calls are ignored.
pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let term = Terminal {
        stdout_tty: std::io::stdout().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some(),
        columns: columns.as_deref(),
    };
    let _ = STYLE.set(resolve(flags, term));
}

/// The style recorded by [`init`], or plain unfitted tables before it runs.
#[must_use]
pub fn table_style() -> TableStyle {
    STYLE.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{Terminal, resolve};
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            project: None,
            color,
        }
    }

    const TTY: Terminal<'static> = Terminal {
        stdout_tty: true,
        no_color: false,
        columns: Some("120"),
    };

    #[test]
    fn auto_colors_tables_on_a_tty() {
        let style = resolve(&flags(OutputFormat::Table, ColorMode::Auto), TTY);
        assert!(style.color);
        assert_eq!(style.max_width, Some(120));
    }

    #[test]
    fn auto_respects_no_color_and_pipes() {
        let table = flags(OutputFormat::Table, ColorMode::Auto);
        assert!(!resolve(&table, Terminal { no_color: true, ..TTY }).color);
        assert!(!resolve(&table, Terminal { stdout_tty: false, ..TTY }).color);
    }

    #[test]
    fn json_is_never_colored() {
        let style = resolve(&flags(OutputFormat::Json, ColorMode::Always), TTY);
        assert!(!style.color);
    }

    #[test]
    fn tiny_or_bogus_widths_are_ignored() {
        let table = flags(OutputFormat::Table, ColorMode::Never);
        let narrow = Terminal { columns: Some("20"), ..TTY };
        let bogus = Terminal { columns: Some("wide"), ..TTY };
        assert_eq!(resolve(&table, narrow).max_width, None);
        assert_eq!(resolve(&table, bogus).max_width, None);
    }
}
