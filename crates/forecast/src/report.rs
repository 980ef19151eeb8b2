use serde::Serialize;

use stockcast_core::{ForecastHorizon, Mode, TimeSeries};
use stockcast_inventory::InventoryPlan;

use crate::differencing::DifferencedSeries;
use crate::order::ArimaOrder;
use crate::seasonal::SeasonalProfile;
use crate::stationarity::StationarityReport;

/// Output of one forecast run.
///
/// `forecast` and `recommendations` are the contract consumed by charts and
/// tables; `summary` and `diagnostics` are informational.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub forecast: ForecastHorizon,
    pub recommendations: InventoryPlan,
    pub summary: ForecastSummary,
    pub diagnostics: RunDiagnostics,
}

/// Recent history vs. projected demand.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    /// Mean of the last `horizon` observations (or all, if fewer).
    pub past_avg: f64,
    pub future_avg: f64,
    /// Relative change of `future_avg` over `past_avg`; absent when `past_avg` is 0.
    pub change_percent: Option<f64>,
    pub total_units_to_order: f64,
}

impl ForecastSummary {
    pub fn compute(series: &TimeSeries, forecast: &ForecastHorizon, plan: &InventoryPlan) -> Self {
        let values = series.values();
        let take = forecast.len().clamp(1, values.len());
        let recent = &values[values.len() - take..];
        let past_avg = recent.iter().sum::<f64>() / take as f64;
        let future_avg = forecast.mean_point().unwrap_or(0.0);

        let change_percent = (past_avg != 0.0).then(|| (future_avg - past_avg) / past_avg * 100.0);

        Self {
            past_avg,
            future_avg,
            change_percent,
            total_units_to_order: plan.total_units_to_order(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SelectedOrder {
    pub selector: &'static str,
    pub order: ArimaOrder,
}

/// What the run computed along the way, including the analysis log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunDiagnostics {
    pub mode: Mode,
    pub observations: usize,
    pub stationarity: StationarityReport,
    /// Advanced mode, non-stationary series only. Never used by the forecast.
    pub differenced: Option<DifferencedSeries>,
    /// Advanced mode only. Never used by the forecast.
    pub selected_order: Option<SelectedOrder>,
    pub seasonal: SeasonalProfile,
    pub baseline: f64,
    pub trend: f64,
    pub log: Vec<String>,
}
