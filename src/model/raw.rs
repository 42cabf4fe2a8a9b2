//! Raw API values
//!
//! The indicator endpoint does not agree with itself on how a number is
//! encoded: plain JSON numbers, numeric strings and driver-wrapped numerics
//! (`{"String": "123.5", "Valid": true}`) all show up. [`RawValue`] decodes
//! that once at the boundary so the rest of the crate handles one shape.

use serde_json::{Map, Value};

/// A record exactly as the server sent it.
pub type RawRecord = Map<String, Value>;

/// Field names probed for a wrapped numeric's text, in order.
const WRAPPED_TEXT_FIELDS: [&str; 2] = ["String", "StringValue"];

/// A numeric value as encoded on the wire
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A JSON number (booleans are folded in as 1/0)
    Plain(f64),
    /// A string that should contain a number
    Text(String),
    /// An object wrapping a nullable numeric; holds the extracted text, if any
    Wrapped(Option<String>),
    /// Absent, `null`, or a shape with no numeric reading (arrays)
    Missing,
}

impl RawValue {
    /// Decode a JSON value (or its absence)
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) | Some(Value::Array(_)) => RawValue::Missing,
            Some(Value::Number(n)) => RawValue::Plain(n.as_f64().unwrap_or(0.0)),
            Some(Value::Bool(b)) => RawValue::Plain(if *b { 1.0 } else { 0.0 }),
            Some(Value::String(s)) => RawValue::Text(s.clone()),
            Some(Value::Object(map)) => RawValue::Wrapped(wrapped_text(map)),
        }
    }

    /// Read the numeric field of a record: `value`, falling back to `Value`
    /// when the former is absent or `null`.
    pub fn from_record(record: &RawRecord) -> Self {
        let value = record
            .get("value")
            .filter(|v| !v.is_null())
            .or_else(|| record.get("Value"));
        Self::from_json(value)
    }

    /// Coerce to a number. Anything unusable becomes `0.0`; never NaN.
    pub fn to_number(&self) -> f64 {
        self.to_optional_number().unwrap_or(0.0)
    }

    /// Coerce to a number, keeping "no usable number" distinct from zero
    pub fn to_optional_number(&self) -> Option<f64> {
        match self {
            RawValue::Plain(n) => Some(*n).filter(|n| n.is_finite()),
            RawValue::Text(s) => parse_numeric(s),
            RawValue::Wrapped(Some(s)) => parse_numeric(s),
            RawValue::Wrapped(None) | RawValue::Missing => None,
        }
    }
}

/// Pull the text out of a wrapped numeric object
fn wrapped_text(map: &Map<String, Value>) -> Option<String> {
    WRAPPED_TEXT_FIELDS
        .iter()
        .filter_map(|field| map.get(*field))
        .find(|v| !v.is_null())
        .and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Parse a decimal number; empty text counts as zero, like a JS `Number("")`
fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_plain_and_text_values() {
        assert_eq!(RawValue::from_json(Some(&json!(42))).to_number(), 42.0);
        assert_eq!(RawValue::from_json(Some(&json!("123.5"))).to_number(), 123.5);
        assert_eq!(RawValue::from_json(Some(&json!(" 7 "))).to_number(), 7.0);
        assert_eq!(RawValue::from_json(Some(&json!(true))).to_number(), 1.0);
    }

    #[test]
    fn test_wrapped_values() {
        let wrapped = json!({"String": "4397073", "Valid": true});
        assert_eq!(
            RawValue::from_json(Some(&wrapped)),
            RawValue::Wrapped(Some("4397073".to_string()))
        );
        assert_eq!(RawValue::from_json(Some(&wrapped)).to_number(), 4397073.0);

        let fallback = json!({"String": null, "StringValue": "12"});
        assert_eq!(RawValue::from_json(Some(&fallback)).to_number(), 12.0);

        let empty = json!({"Valid": false});
        assert_eq!(RawValue::from_json(Some(&empty)), RawValue::Wrapped(None));
        assert_eq!(RawValue::from_json(Some(&empty)).to_number(), 0.0);
    }

    #[test]
    fn test_garbage_degrades_to_zero() {
        for value in [json!(null), json!("abc"), json!([1, 2]), json!("NaN"), json!("inf")] {
            assert_eq!(RawValue::from_json(Some(&value)).to_number(), 0.0, "{value}");
        }
        assert_eq!(RawValue::from_json(None).to_number(), 0.0);
        assert_eq!(RawValue::from_json(Some(&json!("abc"))).to_optional_number(), None);
    }

    #[test]
    fn test_record_value_fallback() {
        let rec = record(json!({"value": null, "Value": 5}));
        assert_eq!(RawValue::from_record(&rec).to_number(), 5.0);

        let rec = record(json!({"value": 0, "Value": 5}));
        assert_eq!(RawValue::from_record(&rec).to_number(), 0.0);

        let rec = record(json!({"county": "Lamu"}));
        assert_eq!(RawValue::from_record(&rec), RawValue::Missing);
    }
}
