use std::cmp::Ordering;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns shown first, in this order; any others follow alphabetically.
const COLUMN_ORDER: &[&str] = &[
    "id",
    "name",
    "category",
    "status",
    "location",
    "dateFound",
    "itemId",
    "claimantName",
    "claimantContact",
    "finderName",
    "finderContact",
    "description",
];

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

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(match value {
        Value::Array(items) => render_array_table(&items),
        Value::Object(map) => render_object_table(&map),
        scalar => table::render_values(&[scalar], table_options()),
    })
}

/// Scalars as a key/value table, then one titled section per nested record
/// or list of records.
fn render_object_table(map: &Map<String, Value>) -> String {
    let mut fields = Vec::new();
    let mut sections = Vec::new();
    for (key, value) in map {
        match value {
            Value::Object(inner) => {
                sections.push(format!("{key}:\n{}", render_object_table(inner)));
            }
            Value::Array(items) if items.iter().any(Value::is_object) => {
                sections.push(format!("{key}:\n{}", render_array_table(items)));
            }
            other => fields.push((key.as_str(), other)),
        }
    }

    let mut parts = Vec::with_capacity(1 + sections.len());
    if !fields.is_empty() {
        fields.sort_by(|a, b| column_order(a.0, b.0));
        parts.push(table::render_record(&fields, table_options()));
    }
    parts.extend(sections);
    parts.join("\n\n")
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        return table::render_values(items, table_options());
    }

    let records: Vec<&Map<String, Value>> = items.iter().filter_map(Value::as_object).collect();
    let mut headers = Vec::<&str>::new();
    for key in records.iter().flat_map(|record| record.keys()) {
        if !headers.contains(&key.as_str()) {
            headers.push(key.as_str());
        }
    }
    if headers.is_empty() {
        return String::from("(no columns)");
    }
    headers.sort_by(|a, b| column_order(a, b));

    table::render_rows(&headers, &records, table_options())
}

fn column_order(a: &str, b: &str) -> Ordering {
    let rank = |name: &str| {
        COLUMN_ORDER
            .iter()
            .position(|column| *column == name)
            .unwrap_or(usize::MAX)
    };
    rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
}
