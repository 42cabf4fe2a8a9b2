//! Numeric Normalizer
//!
//! Turns one raw indicator record into a `{name, value}` pair. The server
//! has shipped several field spellings over time, so the name is resolved
//! from a fixed list of candidates and the value goes through [`RawValue`].
//!
//! Normalization cannot fail: a record with no usable value gets `0.0`, and
//! a record with no usable name gets `None` (the series pipeline drops it).

use serde_json::Value;

use crate::model::{IndicatorPoint, RawRecord, RawValue};

/// Name fields, highest priority first
pub const NAME_FIELDS: [&str; 6] = ["county_name", "CountyName", "county", "name", "label", "code"];

/// A record after normalization; `name` is `None` when no candidate resolved
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub name: Option<String>,
    pub value: f64,
}

impl NormalizedRecord {
    /// Convert into a point, dropping nameless records
    pub fn into_point(self) -> Option<IndicatorPoint> {
        let value = self.value;
        self.name.map(|name| IndicatorPoint { name, value })
    }
}

/// Normalize a single raw record
pub fn normalize(record: &RawRecord) -> NormalizedRecord {
    NormalizedRecord {
        name: resolve_name(record),
        value: RawValue::from_record(record).to_number(),
    }
}

/// First non-empty name candidate
pub fn resolve_name(record: &RawRecord) -> Option<String> {
    NAME_FIELDS
        .iter()
        .filter_map(|field| record.get(*field))
        .find_map(name_text)
}

fn name_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        // Zero is treated like an empty name
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}
