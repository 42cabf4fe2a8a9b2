//! County reference data

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::raw::RawValue;
use crate::view::format::thousands;

/// Placeholder shown when a county has no former province
pub const PROVINCE_PLACEHOLDER: &str = "N/A";

/// Placeholder shown when a county has no area
pub const AREA_PLACEHOLDER: &str = "-";

/// A Kenyan county as served by `GET /api/v1/counties`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct County {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub former_province: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    pub area_sq_km: Option<f64>,
}

impl County {
    pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            former_province: None,
            area_sq_km: None,
        }
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.former_province = Some(province.into());
        self
    }

    pub fn area(mut self, area_sq_km: f64) -> Self {
        self.area_sq_km = Some(area_sq_km);
        self
    }

    /// Former province, or the placeholder
    pub fn province_label(&self) -> &str {
        match self.former_province.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => PROVINCE_PLACEHOLDER,
        }
    }

    /// Area with thousands separators; zero and missing both render the placeholder
    pub fn area_label(&self) -> String {
        match self.area_sq_km {
            Some(area) if area != 0.0 => thousands(area),
            _ => AREA_PLACEHOLDER.to_string(),
        }
    }
}

/// Accepts a string, `null`, or a driver-wrapped `{"String": .., "Valid": ..}`
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Object(map)) => {
            let valid = map.get("Valid").and_then(Value::as_bool).unwrap_or(true);
            map.get("String")
                .and_then(Value::as_str)
                .filter(|_| valid)
                .map(str::to_owned)
        }
        _ => None,
    })
}

/// Accepts anything [`RawValue`] understands; unusable input is `None`
fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(RawValue::from_json(value.as_ref()).to_optional_number())
}
