//! Compact JSON serializer: the structural inverse of the parser.
//!
//! Output uses a fixed `", "` separator between array elements and object
//! members and `"key": value` for members — no pretty-printing, no
//! indentation. String contents are escaped on the way out (`"`, `\`, and
//! the control characters the parser knows how to read back), so any tree
//! built from the supported subset round-trips through [`crate::parse`].
//! Serialization never fails.

use crate::value::Value;

/// Render a value to its compact JSON text form.
///
/// ```rust
/// use minijson_core::{parse, serialize};
///
/// let v = parse("{\"a\":1,\"b\":[true null]}").unwrap();
/// assert_eq!(serialize(&v), r#"{"a": 1, "b": [true, null]}"#);
/// ```
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Append the compact rendering of `value` to `out`. Lets callers reuse a
/// buffer across serializations.
pub fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(members) => {
            out.push('{');
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_string(key, out);
                out.push_str(": ");
                write_value(member, out);
            }
            out.push('}');
        }
    }
}

/// Emit a quoted string, escaping exactly what the parser decodes: `"`, `\`,
/// backspace, formfeed, newline, carriage return, tab. `/` stays unescaped;
/// other control characters would need `\uXXXX`, which the subset neither
/// reads nor writes, so they pass through raw.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}
