use std::sync::Arc;

use stockcast_core::{EngineError, RunConfig, TimeSeries};

use crate::order::{HeuristicOrderSelector, OrderSelector};
use crate::pipeline::run_with_selector;
use crate::report::ForecastReport;

/// A self-contained unit of forecasting work.
///
/// Jobs own their input, so independent jobs can run on separate threads
/// without sharing anything mutable.
pub trait Job: Send + Sync {
    type Input: Send + Sync;
    type Output: Send;

    /// Caller-facing name (e.g. SKU or file name) used in logs and results.
    fn key(&self) -> &str;

    fn input(&self) -> &Self::Input;

    /// Must be a pure function of the job's input and settings.
    fn run(&self) -> Result<Self::Output, EngineError>;
}

/// Forecast + replenishment plan for one named series.
#[derive(Clone)]
pub struct ForecastJob {
    key: String,
    series: TimeSeries,
    config: RunConfig,
    selector: Arc<dyn OrderSelector>,
}

impl core::fmt::Debug for ForecastJob {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ForecastJob")
            .field("key", &self.key)
            .field("observations", &self.series.len())
            .field("config", &self.config)
            .field("selector", &self.selector.name())
            .finish()
    }
}

impl ForecastJob {
    pub fn new(key: impl Into<String>, series: TimeSeries, config: RunConfig) -> Self {
        let selector = HeuristicOrderSelector::new(config.policy.long_series_threshold);
        Self {
            key: key.into(),
            series,
            config,
            selector: Arc::new(selector),
        }
    }

    pub fn with_selector(mut self, selector: Arc<dyn OrderSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}

impl Job for ForecastJob {
    type Input = TimeSeries;
    type Output = ForecastReport;

    fn key(&self) -> &str {
        &self.key
    }

    fn input(&self) -> &Self::Input {
        &self.series
    }

    fn run(&self) -> Result<ForecastReport, EngineError> {
        run_with_selector(&self.series, &self.config, self.selector.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcast_core::Mode;

    use crate::order::ArimaOrder;
    use crate::stationarity::StationarityReport;
    use crate::test_support::monthly_series;

    struct FixedOrder;

    impl OrderSelector for FixedOrder {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn select(&self, _series: &TimeSeries, _stationarity: &StationarityReport) -> ArimaOrder {
            ArimaOrder::new(3, 0, 0)
        }
    }

    #[test]
    fn job_runs_pipeline_over_its_series() {
        let job = ForecastJob::new("sku-1", monthly_series(&[100.0; 24]), RunConfig::default());
        let report = job.run().unwrap();

        assert_eq!(job.key(), "sku-1");
        assert_eq!(job.input().len(), 24);
        assert_eq!(report.forecast.len(), 3);
    }

    #[test]
    fn swapped_selector_changes_diagnostics_not_forecast() {
        let series = monthly_series(&[10.0, 12.0, 15.0, 11.0, 14.0, 13.0]);
        let config = RunConfig::default().with_mode(Mode::Advanced);

        let heuristic = ForecastJob::new("a", series.clone(), config).run().unwrap();
        let fixed = ForecastJob::new("a", series, config)
            .with_selector(Arc::new(FixedOrder))
            .run()
            .unwrap();

        let order = fixed.diagnostics.selected_order.unwrap();
        assert_eq!(order.selector, "fixed");
        assert_eq!(order.order, ArimaOrder::new(3, 0, 0));
        assert_eq!(heuristic.forecast, fixed.forecast);
        assert_eq!(heuristic.recommendations, fixed.recommendations);
    }

    #[test]
    fn invalid_config_fails_the_job() {
        let job = ForecastJob::new(
            "bad",
            monthly_series(&[1.0]),
            RunConfig::default().with_horizon_steps(0),
        );
        assert!(matches!(job.run(), Err(EngineError::InvalidConfig(_))));
    }
}
