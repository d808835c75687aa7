use std::fmt::Write;

use super::{FieldKind, Metadata, Schema, Value, DELIMITER};

/// Renders `metadata` and `body` in the layout [`super::parse`] reads: one
/// line per schema field in schema order, then a blank line and the body.
///
/// Absent fields render empty, except `omit_when_absent` fields which are
/// left out. Text is always double quoted and escaped, so colons, commas,
/// quotes and newlines survive a round trip.
#[must_use]
pub fn render(schema: &Schema, metadata: &Metadata, body: &str) -> String {
    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push('\n');

    for field in schema.fields {
        let value = metadata.get(field.name);
        if value.is_none() && field.omit_when_absent {
            continue;
        }
        let rendered = match (value, field.kind) {
            (Some(value), _) => render_value(value),
            (None, FieldKind::Text) => quote(""),
            (None, FieldKind::List) => "[]".to_owned(),
            (None, FieldKind::Date | FieldKind::Integer) => String::new(),
        };
        if rendered.is_empty() {
            let _ = writeln!(out, "{}:", field.name);
        } else {
            let _ = writeln!(out, "{}: {rendered}", field.name);
        }
    }

    out.push_str(DELIMITER);
    out.push_str("\n\n");
    let body = body.trim();
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
    }
    out
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Text(text) => quote(text),
        Value::Date(date) => date.format("%Y-%m-%d").to_string(),
        Value::Integer(n) => n.to_string(),
        Value::List(items) => {
            let items = items.iter().map(|item| quote(item)).collect::<Vec<_>>();
            format!("[{}]", items.join(", "))
        }
    }
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
