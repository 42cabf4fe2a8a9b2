//! Indicator series types

use serde::{Deserialize, Serialize};

/// Indicator code used by the population chart
pub const POPULATION_INDICATOR: &str = "POP_TOTAL";

/// Census year used by the population chart
pub const POPULATION_YEAR: i32 = 2019;

/// One ranked entry of an indicator series, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub name: String,
    pub value: f64,
}

impl IndicatorPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Echo of the query the data endpoint answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub indicator: String,
    pub year: i32,
}

/// A statistical indicator listed by `GET /api/v1/indicators`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    #[serde(default)]
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Human title for an indicator chart
pub fn chart_title(indicator: &str, year: i32) -> String {
    match indicator {
        POPULATION_INDICATOR => format!("Population ({})", year),
        other => format!("{} ({})", other, year),
    }
}
