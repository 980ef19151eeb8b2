//! ARIMA order selection.
//!
//! The shipped selector is a heuristic stand-in: it does not estimate any AR
//! or MA coefficients. Its result is reported as a diagnostic and never feeds
//! the point forecast, so a real estimator can be plugged in through
//! [`OrderSelector`] without changing the forecast contract.

use serde::Serialize;

use stockcast_core::TimeSeries;

use crate::stationarity::StationarityReport;

/// `(p, d, q)` model order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArimaOrder {
    pub p: usize,
    pub d: usize,
    pub q: usize,
}

impl ArimaOrder {
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }
}

impl core::fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ARIMA({},{},{})", self.p, self.d, self.q)
    }
}

/// Strategy for picking a model order from the raw series.
pub trait OrderSelector: Send + Sync {
    /// Short identifier recorded in run diagnostics.
    fn name(&self) -> &'static str;

    fn select(&self, series: &TimeSeries, stationarity: &StationarityReport) -> ArimaOrder;
}

/// `d = 1` for non-stationary series; `p = q = 2` for long series, else 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HeuristicOrderSelector {
    long_series_threshold: usize,
}

impl Default for HeuristicOrderSelector {
    fn default() -> Self {
        Self::new(24)
    }
}

impl HeuristicOrderSelector {
    pub fn new(long_series_threshold: usize) -> Self {
        Self {
            long_series_threshold,
        }
    }
}

impl OrderSelector for HeuristicOrderSelector {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn select(&self, series: &TimeSeries, stationarity: &StationarityReport) -> ArimaOrder {
        let d = if stationarity.stationary { 0 } else { 1 };
        let pq = if series.len() >= self.long_series_threshold { 2 } else { 1 };
        ArimaOrder::new(pq, d, pq)
    }
}
