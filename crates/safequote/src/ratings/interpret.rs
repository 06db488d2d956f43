//! Rules for deciding which rating values are worth showing and how.
//!
//! NHTSA reports missing data as an empty string, a zero, or the literal
//! `"Not Rated"`. None of those may be rendered as a rating, and none of them
//! may be confused with a genuine one-to-five star result.

use serde::Serialize;
use serde_json::Value;

pub const NOT_RATED: &str = "Not Rated";

/// A value that passed [`is_rated`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RatingValue {
    Stars(u8),
    Text(String),
}

impl RatingValue {
    pub fn stars(&self) -> Option<u8> {
        match self {
            RatingValue::Stars(stars) => Some(*stars),
            RatingValue::Text(_) => None,
        }
    }
}

pub fn is_rated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != NOT_RATED,
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Classifies a rated value as stars (a lone digit 1-5) or free text.
pub fn classify(value: &Value) -> Option<RatingValue> {
    if !is_rated(value) {
        return None;
    }

    let text = display_text(value);
    match text.as_bytes() {
        [digit @ b'1'..=b'5'] => Some(RatingValue::Stars(digit - b'0')),
        _ => Some(RatingValue::Text(text)),
    }
}

/// Renders a fraction in `[0, 1]` as a percentage with one decimal place.
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub(crate) fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
