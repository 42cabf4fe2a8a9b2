//! Series Pipeline
//!
//! normalize → drop nameless → stable sort by value descending → top N.

use std::cmp::Ordering;

use crate::model::{IndicatorPoint, RawRecord};
use crate::normalize::normalize;

/// How many points the chart shows unless told otherwise
pub const DEFAULT_TOP_N: usize = 10;

/// Build a ranked series from raw records
pub fn build_series(raw: &[RawRecord], top_n: usize) -> Vec<IndicatorPoint> {
    let points = raw
        .iter()
        .filter_map(|record| normalize(record).into_point())
        .collect();

    rank_points(points, top_n)
}

/// [`build_series`] with [`DEFAULT_TOP_N`]
pub fn build_series_default(raw: &[RawRecord]) -> Vec<IndicatorPoint> {
    build_series(raw, DEFAULT_TOP_N)
}

/// Sort already-normalized points by value, descending, and keep the first `top_n`.
///
/// Ties keep their input order.
pub fn rank_points(mut points: Vec<IndicatorPoint>, top_n: usize) -> Vec<IndicatorPoint> {
    // slice::sort_by is stable
    points.sort_by(|a, b| descending(a.value, b.value));
    points.truncate(top_n);
    points
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
