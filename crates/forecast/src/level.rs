//! Level (baseline) and slope (trend) estimates from the tail of the series.

use stockcast_core::{EngineError, EngineResult};

/// Average per-period change over the last `min(n, window)` observations:
/// `(last - first) / count`.
/// Divides by the observation count, not the number of intervals.
pub fn trend(values: &[f64], window: usize) -> f64 {
    let count = values.len().min(window);
    if count == 0 {
        return 0.0;
    }
    let tail = &values[values.len() - count..];
    (tail[count - 1] - tail[0]) / count as f64
}

/// Linearly weighted moving average over the last `min(n, window)` values.
///
/// The most recent value weighs `w`, the one before `w - 1`, down to 1.
pub fn baseline(values: &[f64], window: usize) -> EngineResult<f64> {
    let w = values.len().min(window);
    if w == 0 {
        return Err(EngineError::DegenerateBaseline);
    }

    let (weighted_sum, weight_sum) = values
        .iter()
        .rev()
        .take(w)
        .enumerate()
        .fold((0.0f64, 0.0f64), |(acc, wsum), (i, v)| {
            let weight = (w - i) as f64;
            (acc + v * weight, wsum + weight)
        });

    Ok(weighted_sum / weight_sum)
}
