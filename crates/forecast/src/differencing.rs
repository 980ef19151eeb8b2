//! Lag differencing.

use serde::Serialize;

/// Lag-`order` differences: `values[i] - values[i - order]` for `i` in `order..n`.
///
/// Returns `n - order` elements, or none when `order >= n`. Order 0 means no
/// differencing and returns the input unchanged.
pub fn difference(values: &[f64], order: usize) -> Vec<f64> {
    if order == 0 {
        return values.to_vec();
    }
    if order >= values.len() {
        return Vec::new();
    }
    values
        .iter()
        .skip(order)
        .zip(values.iter())
        .map(|(cur, prev)| cur - prev)
        .collect()
}

/// Differencing outcome kept for diagnostics.
///
/// The differenced values only document the non-stationarity assessment; the
/// point forecast is always computed on the raw series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifferencedSeries {
    pub order: usize,
    pub values: Vec<f64>,
}

impl DifferencedSeries {
    pub fn compute(values: &[f64], order: usize) -> Self {
        Self {
            order,
            values: difference(values, order),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
