use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
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

/// Arrays become one row per element; a single object becomes key/value
/// rows. Nested objects are flattened into dotted column names
/// (`series.title`) so volumes and their series share one row.
fn render_table(value: &Value) -> anyhow::Result<String> {
    let options = table_options();
    match value {
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let flat = items
                .iter()
                .filter_map(Value::as_object)
                .map(flatten)
                .collect::<Vec<_>>();
            let mut headers = Vec::<String>::new();
            for row in &flat {
                for key in row.keys() {
                    if !headers.contains(key) {
                        headers.push(key.clone());
                    }
                }
            }
            let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            let rows = flat
                .iter()
                .map(|row| {
                    headers
                        .iter()
                        .map(|key| row.get(key).map_or_else(|| String::from("-"), cell))
                        .collect()
                })
                .collect::<Vec<Vec<String>>>();
            Ok(table::render_entity_table(&header_refs, &rows, options))
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            Ok(table::render_entity_table(&["value"], &rows, options))
        }
        Value::Object(map) => {
            let rows = flatten(map)
                .into_iter()
                .map(|(key, value)| vec![key, cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(table::render_entity_table(
            &["value"],
            &[vec![cell(scalar)]],
            options,
        )),
    }
}

/// Flatten nested objects into dotted keys.
fn flatten(map: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in map {
        match value {
            Value::Object(inner) => {
                for (inner_key, inner_value) in flatten(inner) {
                    out.insert(format!("{key}.{inner_key}"), inner_value);
                }
            }
            other => {
                out.insert(key.clone(), other.clone());
            }
        }
    }
    out
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        count: u32,
    }

    #[test]
    fn json_render_is_pretty_json() {
        let out = render(&Example { id: "x", count: 7 }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["id"], "x");
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { id: "x", count: 7 }, OutputFormat::Raw).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["count"], 7);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_renders_as_key_value_rows() {
        let out = render(&Example { id: "x", count: 7 }, OutputFormat::Table).unwrap();
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("id"));
        assert!(out.contains("count"));
    }

    #[test]
    fn nested_objects_flatten_to_dotted_columns() {
        let value = json!([
            {"id": "vol-1", "status": "unread", "series": {"title": "Naruto"}},
            {"id": "vol-2", "status": "reading", "series": {"title": "Bleach"}}
        ]);
        let out = render(&value, OutputFormat::Table).unwrap();
        let header = out.lines().next().unwrap();
        assert!(header.contains("series.title"));
        assert!(out.contains("Bleach"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let out = render(&Vec::<Example>::new(), OutputFormat::Table).unwrap();
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn string_lists_join_into_one_cell() {
        let value = json!({"errors": ["a", "b"]});
        let out = render(&value, OutputFormat::Table).unwrap();
        assert!(out.contains("a, b"));
    }
}
