//! Ranked bar chart view model
//!
//! A chart is a title plus one horizontal bar per point, largest first. Each
//! bar carries its pre-formatted label and its length relative to the
//! largest bar, so renderers only have to scale `ratio` to their width.

use serde::Serialize;

use super::format::thousands;
use crate::model::{IndicatorPoint, RawRecord};
use crate::series::{build_series, rank_points};

/// One bar of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// 1-based position in the ranking
    pub rank: usize,
    pub name: String,
    pub value: f64,
    /// `value` with thousands separators
    pub label: String,
    /// `value / max`, in `[0, 1]`
    pub ratio: f64,
}

/// What a hover or focus on a bar reveals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub title: String,
    pub bars: Vec<Bar>,
}

impl ChartModel {
    /// Chart from points that already went through the series pipeline.
    ///
    /// Points are re-ranked, which is a no-op for pipeline output.
    pub fn from_points(title: impl Into<String>, points: &[IndicatorPoint], top_n: usize) -> Self {
        Self::from_ranked(title.into(), rank_points(points.to_vec(), top_n))
    }

    /// Chart from raw indicator rows, normalizing them first
    pub fn from_raw(title: impl Into<String>, records: &[RawRecord], top_n: usize) -> Self {
        Self::from_ranked(title.into(), build_series(records, top_n))
    }

    fn from_ranked(title: String, points: Vec<IndicatorPoint>) -> Self {
        let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

        let bars = points
            .into_iter()
            .enumerate()
            .map(|(i, point)| Bar {
                rank: i + 1,
                label: thousands(point.value),
                ratio: ratio(point.value, max),
                name: point.name,
                value: point.value,
            })
            .collect();

        Self { title, bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Largest value on the chart, or zero when empty
    pub fn max_value(&self) -> f64 {
        self.bars.first().map(|b| b.value).unwrap_or(0.0).max(0.0)
    }

    /// Tooltip for the bar at `index`
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        self.bars.get(index).map(|bar| Tooltip {
            name: bar.name.clone(),
            label: bar.label.clone(),
        })
    }

    /// `count` evenly spaced axis ticks from zero to the largest value, as
    /// `(ratio, label)` pairs
    pub fn ticks(&self, count: usize) -> Vec<(f64, String)> {
        let max = self.max_value();
        if count < 2 || max <= 0.0 {
            return vec![(0.0, thousands(0.0))];
        }

        let steps = (count - 1) as f64;
        (0..count)
            .map(|i| {
                let ratio = i as f64 / steps;
                (ratio, thousands((max * ratio).round()))
            })
            .collect()
    }
}

fn ratio(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max).clamp(0.0, 1.0)
    }
}
