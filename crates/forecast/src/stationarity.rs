//! Half-over-half mean shift test.
//!
//! This is a heuristic, not a unit-root test: the series is split at
//! `floor(n/2)` and the relative change between the two half means is compared
//! to a threshold.

use serde::Serialize;

use stockcast_core::TimeSeries;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct StationarityReport {
    pub first_avg: f64,
    pub second_avg: f64,
    /// `|second_avg - first_avg| / first_avg * 100`, or 0 when `first_avg` is 0.
    pub percent_change: f64,
    pub threshold_pct: f64,
    pub stationary: bool,
}

pub fn assess(series: &TimeSeries, threshold_pct: f64) -> StationarityReport {
    let values = series.values();
    let (first, second) = values.split_at(values.len() / 2);

    let first_avg = mean(first);
    let second_avg = mean(second);

    // Zero (or undefined) first-half level: no relative change to measure.
    let percent_change = if first.is_empty() || first_avg == 0.0 {
        0.0
    } else {
        ((second_avg - first_avg) / first_avg * 100.0).abs()
    };

    StationarityReport {
        first_avg,
        second_avg,
        percent_change,
        threshold_pct,
        stationary: percent_change < threshold_pct,
    }
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}
