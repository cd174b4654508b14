use serde_json::{Number, Value};

/// Text a record value shows inside a table cell.
///
/// Mirrors how the browser stringifies values assigned to `textContent`.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_string(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => cell_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Whole floats below 1e21 print without a fraction, as browsers stringify numbers.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}

/// Non-empty `message` field of a backend reply, if any.
pub fn reply_message(reply: &Value) -> Option<String> {
    match reply.get("message")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        v @ (Value::Array(_) | Value::Object(_)) => Some(cell_text(v)),
        _ => None,
    }
}
