use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Table, TableOptions};

/// Strings longer than this, or spanning lines, print as blocks rather than
/// table cells.
const LONG_TEXT: usize = 80;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_table(serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table(value: Value, options: TableOptions) -> String {
    match value {
        Value::Array(items) => rows_table(&items, options),
        Value::Object(map) => match sole_list(&map) {
            Some(items) => rows_table(items, options),
            None => record_view(map, options),
        },
        scalar => cell(&scalar),
    }
}

/// `{"bookmarks": [...]}` and similar envelopes render as their list.
fn sole_list(map: &Map<String, Value>) -> Option<&Vec<Value>> {
    match map.values().collect::<Vec<_>>().as_slice() {
        [Value::Array(items)] => Some(items),
        _ => None,
    }
}

fn rows_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(none)");
    }
    if !items.iter().all(Value::is_object) {
        let mut table = Table::new(["value"]);
        for item in items {
            table.push(vec![cell(item)]);
        }
        return table.render(options);
    }

    // Union of keys across rows, in first-seen order.
    let mut columns = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for (key, value) in map {
            if !columns.contains(&key.as_str()) && !is_long(value) {
                columns.push(key);
            }
        }
    }

    let mut table = Table::new(columns.iter().copied());
    for map in items.iter().filter_map(Value::as_object) {
        table.push(
            columns
                .iter()
                .map(|column| map.get(*column).map_or_else(|| String::from("-"), cell))
                .collect(),
        );
    }
    table.render(options)
}

fn record_view(map: Map<String, Value>, options: TableOptions) -> String {
    let (long, short): (Vec<_>, Vec<_>) = map.into_iter().partition(|(_, value)| is_long(value));

    let mut out = String::new();
    if !short.is_empty() {
        let mut table = Table::new(["field", "value"]);
        for (key, value) in &short {
            table.push(vec![key.clone(), cell(value)]);
        }
        out.push_str(&table.render(options));
    }
    for (key, value) in long {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(&format!("{key}:\n{}", cell(&value)));
    }
    out
}

fn is_long(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|text| text.contains('\n') || text.chars().count() > LONG_TEXT)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
