//! Plain-text tables for board records.
//!
//! Ids and status columns always print in full. When the terminal is too
//! narrow, only free-text columns (names, descriptions, contacts) give up
//! width, widest first.

use serde_json::{Map, Value};

const GAP: &str = "  ";
/// Free-text columns never shrink below this many characters.
const MIN_TEXT_WIDTH: usize = 8;

/// Layout options resolved from [`crate::ui::UiPrefs`].
#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    /// Record ids and field names: never truncated.
    Key,
    /// Lifecycle labels, colored when enabled.
    Status,
    Text,
}

impl Kind {
    fn of(column: &str) -> Self {
        match column {
            "id" | "itemId" | "key" => Self::Key,
            "status" | "outcome" => Self::Status,
            _ => Self::Text,
        }
    }
}

struct Cell {
    text: String,
    kind: Kind,
}

impl Cell {
    fn new(column: &str, value: &Value) -> Self {
        Self {
            text: cell_text(column, value),
            kind: Kind::of(column),
        }
    }
}

/// One row per record, one column per header. Missing fields print `-`.
#[must_use]
pub fn render_rows(
    headers: &[&str],
    records: &[&Map<String, Value>],
    options: TableOptions,
) -> String {
    let rows = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| Cell::new(header, record.get(*header).unwrap_or(&Value::Null)))
                .collect()
        })
        .collect();
    let kinds: Vec<Kind> = headers.iter().map(|header| Kind::of(header)).collect();
    layout(headers, &kinds, rows, options)
}

/// A single record as `key | value` lines, in the order given.
#[must_use]
pub fn render_record(fields: &[(&str, &Value)], options: TableOptions) -> String {
    let rows = fields
        .iter()
        .map(|(key, value)| {
            vec![
                Cell {
                    text: (*key).to_string(),
                    kind: Kind::Key,
                },
                Cell::new(key, value),
            ]
        })
        .collect();
    layout(&["key", "value"], &[Kind::Key, Kind::Text], rows, options)
}

/// A bare list of values under a single `value` header.
#[must_use]
pub fn render_values(values: &[Value], options: TableOptions) -> String {
    let rows = values.iter().map(|value| vec![Cell::new("value", value)]).collect();
    layout(&["value"], &[Kind::Text], rows, options)
}

/// Display text for one field of a board record.
///
/// Photos collapse to `[photo]` and claim-id lists join with commas.
/// Resolved claim references show the claim id.
#[must_use]
pub fn cell_text(column: &str, value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) if column == "photo" && v.starts_with("data:") => String::from("[photo]"),
        Value::String(v) => v.clone(),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(map) if map.contains_key("id") => cell_text("id", &map["id"]),
        other => other.to_string(),
    }
}

fn layout(
    headers: &[&str],
    kinds: &[Kind],
    rows: Vec<Vec<Cell>>,
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.text.chars().count());
        }
    }

    if let Some(max_width) = options.max_width {
        let floors: Vec<usize> = headers
            .iter()
            .zip(kinds)
            .zip(&widths)
            .map(|((header, kind), width)| match kind {
                Kind::Text => header.chars().count().max(MIN_TEXT_WIDTH).min(*width),
                Kind::Key | Kind::Status => *width,
            })
            .collect();
        shrink_to_fit(&mut widths, &floors, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let text = clip(&cell.text, *width);
                let padded = pad(&text, *width);
                if options.color && cell.kind == Kind::Status {
                    paint_status(&text, &padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest column above its floor, one character at a time,
/// until the row fits or nothing can shrink further.
fn shrink_to_fit(widths: &mut [usize], floors: &[usize], max_width: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .zip(floors)
            .enumerate()
            .filter(|(_, (width, floor))| width > floor)
            .max_by_key(|(_, (width, _))| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}

/// Wrap the visible label in an ANSI color, keeping the padding outside it.
fn paint_status(text: &str, padded: &str) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "available" | "approved" | "applied" => "32",
        "pending" | "declined" | "ignored" => "33",
        "claimed" => "36",
        "missing" => "31",
        _ => return padded.to_string(),
    };
    let fill = &padded[text.len()..];
    format!("\u{1b}[{code}m{text}\u{1b}[0m{fill}")
}
