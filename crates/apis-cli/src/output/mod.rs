use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a list of records as a table in the terminal's style.
pub fn render_list<T: Serialize>(items: &[T]) -> anyhow::Result<String> {
    let values = items
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(table::render_records(&values, ui::table_style()))
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let style = ui::table_style();
    Ok(match serde_json::to_value(value)? {
        Value::Array(items) => table::render_records(&items, style),
        Value::Object(map) => table::render_record(&map, style),
        Value::String(text) => text,
        scalar => scalar.to_string(),
    })
}
