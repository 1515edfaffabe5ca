//! Table rendering for apis records.
//!
//! Alerts, tasks, inspections, hives, apiaries, and recommendations each have
//! a fixed column set, picked by the JSON keys the rows carry. Other rows show
//! every key, leading columns first. Widths count characters, not bytes, and
//! color is applied after padding so escape codes never affect alignment.

use chrono::DateTime;
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Default)]
pub struct TableStyle {
    pub color: bool,
    pub max_width: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
struct Column<'a> {
    key: &'a str,
    header: &'a str,
    cap: usize,
}

const fn col<'a>(key: &'a str, header: &'a str, cap: usize) -> Column<'a> {
    Column { key, header, cap }
}

const ALERT_COLUMNS: &[Column<'static>] = &[
    col("id", "ID", 12),
    col("severity", "SEVERITY", 8),
    col("type", "TYPE", 11),
    col("title", "TITLE", 28),
    col("hiveIds", "HIVES", 26),
    col("message", "MESSAGE", 64),
    col("timestamp", "RAISED", 16),
];

const TASK_COLUMNS: &[Column<'static>] = &[
    col("id", "ID", 12),
    col("status", "STATUS", 11),
    col("priority", "PRIORITY", 8),
    col("dueDate", "DUE", 16),
    col("title", "TITLE", 40),
    col("hiveId", "HIVE", 12),
];

const INSPECTION_COLUMNS: &[Column<'static>] = &[
    col("id", "ID", 12),
    col("inspectionDate", "DATE", 16),
    col("hiveId", "HIVE", 12),
    col("healthStatus", "HEALTH", 15),
    col("queenSeen", "QUEEN", 5),
    col("varroaMitesDetected", "VARROA", 6),
    col("diseaseDetected", "DISEASE", 7),
    col("honeyStores", "HONEY", 8),
];

const HIVE_COLUMNS: &[Column<'static>] = &[
    col("id", "ID", 12),
    col("name", "NAME", 24),
    col("status", "STATUS", 16),
    col("colonyStrength", "STRENGTH", 8),
    col("queenStatus", "QUEEN", 10),
    col("honeyStores", "HONEY", 8),
    col("lastInspected", "LAST INSPECTED", 16),
];

const APIARY_COLUMNS: &[Column<'static>] = &[
    col("id", "ID", 12),
    col("name", "NAME", 24),
    col("status", "STATUS", 16),
    col("location", "LOCATION", 32),
    col("hiveCount", "HIVES", 5),
];

const RECOMMENDATION_COLUMNS: &[Column<'static>] = &[
    col("id", "ID", 12),
    col("priority", "PRIORITY", 8),
    col("type", "TYPE", 12),
    col("hiveId", "HIVE", 12),
    col("title", "TITLE", 32),
    col("description", "DESCRIPTION", 64),
];

/// Keys shown first, in this order, for rows without a fixed layout.
const LEADING_KEYS: &[&str] = &["id", "type", "severity", "status", "title", "name"];

const GENERIC_CAP: usize = 48;

/// Keys that shrink first when the terminal is too narrow.
const FLEX_KEYS: &[&str] = &["message", "description", "title", "location", "value"];

const MIN_FLEX: usize = 12;

const NO_ROWS: &str = "(no rows)";

/// Pick the fixed layout for a row, if it is a known record.
fn layout_for(row: &Map<String, Value>) -> Option<&'static [Column<'static>]> {
    let has = |key: &str| row.contains_key(key);
    if has("severity") && has("dismissed") {
        Some(ALERT_COLUMNS)
    } else if has("dueDate") {
        Some(TASK_COLUMNS)
    } else if has("inspectionDate") {
        Some(INSPECTION_COLUMNS)
    } else if has("colonyStrength") {
        Some(HIVE_COLUMNS)
    } else if has("hiveCount") {
        Some(APIARY_COLUMNS)
    } else if has("priority") && has("hiveId") {
        Some(RECOMMENDATION_COLUMNS)
    } else {
        None
    }
}

/// Sort key putting the most urgent alerts first. Other rows keep their order.
fn urgency(row: &Map<String, Value>) -> u8 {
    match row.get("severity").and_then(Value::as_str) {
        Some("CRITICAL") => 0,
        Some("WARNING") => 1,
        _ => 2,
    }
}

/// Render a list of records, one row each.
///
/// Alert lists are ordered by severity, keeping their original order within
/// a severity.
#[must_use]
pub fn render_records(items: &[Value], style: TableStyle) -> String {
    if items.is_empty() {
        return NO_ROWS.to_string();
    }

    let Some(mut maps) = items
        .iter()
        .map(Value::as_object)
        .collect::<Option<Vec<_>>>()
    else {
        let rows = items.iter().map(|item| vec![cell("value", item)]).collect::<Vec<_>>();
        return render_grid(&[col("value", "VALUE", GENERIC_CAP)], &rows, style);
    };

    let layout = layout_for(maps[0]).filter(|layout| {
        maps.iter()
            .all(|map| layout_for(map).is_some_and(|other| std::ptr::eq(*layout, other)))
    });

    let columns: Vec<Column<'_>> = match layout {
        Some(layout) => layout.to_vec(),
        None => generic_columns(&maps),
    };
    if layout.is_some_and(|layout| std::ptr::eq(layout, ALERT_COLUMNS)) {
        maps.sort_by_key(|map| urgency(map));
    }

    let rows = maps
        .iter()
        .map(|map| {
            columns
                .iter()
                .map(|column| {
                    map.get(column.key)
                        .map_or_else(|| "-".to_string(), |value| cell(column.key, value))
                })
                .collect()
        })
        .collect::<Vec<_>>();

    render_grid(&columns, &rows, style)
}

/// Render one record as `FIELD`/`VALUE` pairs.
///
/// Nested records and lists of records (a hive's inspections, an advisor
/// report's alerts) follow as their own tables under a `name (count)` heading.
#[must_use]
pub fn render_record(record: &Map<String, Value>, style: TableStyle) -> String {
    let mut fields = Vec::new();
    let mut nested = Vec::new();
    for (key, value) in record {
        match value {
            Value::Array(items) if items.iter().any(Value::is_object) => {
                nested.push((key, items.as_slice()));
            }
            Value::Object(_) => nested.push((key, std::slice::from_ref(value))),
            _ => fields.push((key, value)),
        }
    }
    fields.sort_by(|a, b| key_rank(a.0).cmp(&key_rank(b.0)).then(a.0.cmp(b.0)));

    let rows = fields
        .iter()
        .map(|(key, value)| vec![(*key).clone(), cell(key, value)])
        .collect::<Vec<_>>();
    let mut out = render_grid(
        &[col("field", "FIELD", 24), col("value", "VALUE", 64)],
        &rows,
        style,
    );

    for (key, items) in nested {
        out.push_str(&format!("\n\n{key} ({})\n", items.len()));
        out.push_str(&render_records(items, style));
    }
    out
}

fn key_rank(key: &str) -> usize {
    LEADING_KEYS
        .iter()
        .position(|leading| *leading == key)
        .unwrap_or(LEADING_KEYS.len())
}

fn generic_columns<'a>(maps: &[&'a Map<String, Value>]) -> Vec<Column<'a>> {
    let mut keys = Vec::<&'a str>::new();
    for key in maps.iter().copied().flat_map(Map::keys) {
        if !keys.contains(&key.as_str()) {
            keys.push(key);
        }
    }
    keys.sort_by(|a, b| key_rank(a).cmp(&key_rank(b)).then(a.cmp(b)));
    keys.into_iter()
        .map(|key| col(key, key, GENERIC_CAP))
        .collect()
}

/// Format one value for display.
///
/// Timestamps are cut to minutes, id lists are comma-joined, and null is `-`.
fn cell(key: &str, value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if is_date_key(key) => DateTime::parse_from_rfc3339(s)
            .map_or_else(|_| s.clone(), |dt| dt.format("%Y-%m-%d %H:%M").to_string()),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn is_date_key(key: &str) -> bool {
    key == "timestamp" || key.ends_with("Date") || key.ends_with("At") || key == "lastInspected"
}

fn render_grid(columns: &[Column], rows: &[Vec<String>], style: TableStyle) -> String {
    let mut widths = columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let longest = rows
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|text| text.chars().count())
                .max()
                .unwrap_or(0);
            longest.min(column.cap).max(column.header.chars().count())
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = style.max_width {
        shrink_to_fit(columns, &mut widths, max_width);
    }

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad(&clip(column.header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header.trim_end().chars().count());

    let mut lines = vec![header.trim_end().to_string(), divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(idx, width)| {
                let text = clip(row.get(idx).map_or("-", String::as_str), *width);
                let right = looks_numeric(&text);
                let padded = pad(&text, *width, right);
                if style.color {
                    paint(&text, &padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Take the overflow out of the widest flexible column, down to `MIN_FLEX`.
fn shrink_to_fit(columns: &[Column], widths: &mut [usize], max_width: usize) {
    let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
    let Some(overflow) = total.checked_sub(max_width).filter(|over| *over > 0) else {
        return;
    };

    let flex = columns
        .iter()
        .enumerate()
        .filter(|(_, column)| FLEX_KEYS.iter().any(|flex| *flex == column.key))
        .max_by_key(|(idx, _)| widths[*idx])
        .map(|(idx, _)| idx);
    if let Some(idx) = flex {
        let floor = MIN_FLEX.max(columns[idx].header.chars().count());
        widths[idx] = widths[idx].saturating_sub(overflow).max(floor);
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out = text.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    if right {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

fn looks_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

/// Color a padded cell by its word. Only the word is wrapped, padding stays
/// outside the escape codes.
fn paint(word: &str, padded: &str) -> String {
    let code = match word {
        "CRITICAL" | "HIGH" | "CANCELLED" | "DEAD" => "31",
        "WARNING" | "MEDIUM" | "OVERDUE" | "CONCERNING" | "NEEDS_ATTENTION" | "WEAK"
        | "NEEDS_INSPECTION" | "LOW" | "VERY_LOW" => "33",
        "INFO" | "COMPLETED" | "HEALTHY" | "EXCELLENT" | "STRONG" | "GOOD" => "32",
        _ => return padded.to_string(),
    };
    padded.replacen(word, &format!("\u{1b}[{code}m{word}\u{1b}[0m"), 1)
}
