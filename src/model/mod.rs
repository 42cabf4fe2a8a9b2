//! Data model
//!
//! Wire types for the county API plus the canonical shapes the rest of the
//! crate works with.
//!
//! - [`County`]: reference entity, passed through to the table untouched
//! - [`RawRecord`] / [`RawValue`]: indicator rows before normalization
//! - [`IndicatorPoint`]: the canonical `{name, value}` pair

mod county;
mod indicator;
mod raw;

pub use county::{County, AREA_PLACEHOLDER, PROVINCE_PLACEHOLDER};
pub use indicator::{
    chart_title, Indicator, IndicatorMeta, IndicatorPoint, POPULATION_INDICATOR, POPULATION_YEAR,
};
pub use raw::{RawRecord, RawValue};

use serde::{Deserialize, Serialize};

/// The `{"data": [...]}` wrapper around list responses.
///
/// A response without `data` decodes as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<IndicatorMeta>,
}

/// The `{"data": {...}}` wrapper around single-item responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEnvelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_data() {
        let envelope: Envelope<County> = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_empty());
        assert!(envelope.meta.is_none());
    }

    #[test]
    fn test_envelope_with_meta() {
        let envelope: Envelope<RawRecord> = serde_json::from_str(
            r#"{"data": [{"county": "Nairobi", "value": "4397073"}],
                "meta": {"indicator": "POP_TOTAL", "year": 2019}}"#,
        )
        .unwrap();

        assert_eq!(envelope.data.len(), 1);
        assert_eq!(
            envelope.meta,
            Some(IndicatorMeta {
                indicator: "POP_TOTAL".to_string(),
                year: 2019
            })
        );
    }
}
