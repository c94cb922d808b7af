//! Small UI helpers: value formatting for cards and axes.

use serde_json::Value;

/// Shown wherever a metric has no usable value yet.
pub const PLACEHOLDER: &str = "–";

/// Card rendering of one metric field. Numbers print as JSON does (42,
/// 3.5, 120.33); strings pass through; anything absent or null degrades to
/// the placeholder.
pub fn fmt_value(v: Option<&Value>) -> String {
    match v {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => PLACEHOLDER.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Axis tick label: whole numbers without a fraction, everything else with
/// one decimal.
pub fn fmt_axis(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
