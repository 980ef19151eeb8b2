//! `stockcast-forecast`
//!
//! **Responsibility:** demand forecasting and the full forecast run.
//!
//! The model is a trend + seasonal baseline:
//! - weighted moving average level over the recent window,
//! - average per-period slope over the trend window,
//! - monthly multiplicative seasonal factors,
//! - a confidence band widening with `sqrt(t)`.
//!
//! `advanced` mode additionally differences non-stationary series and selects
//! an ARIMA order. Both are diagnostics only: no AR/MA model is fitted and the
//! numbers are identical to `basic` mode.

pub mod differencing;
pub mod example;
pub mod forecaster;
pub mod job;
pub mod level;
pub mod order;
pub mod pipeline;
pub mod report;
pub mod scheduler;
pub mod seasonal;
pub mod stationarity;

pub use differencing::{DifferencedSeries, difference};
pub use example::ExampleSeries;
pub use forecaster::{ForecastComponents, Forecaster};
pub use job::{ForecastJob, Job};
pub use order::{ArimaOrder, HeuristicOrderSelector, OrderSelector};
pub use pipeline::{RunState, run, run_with_selector};
pub use report::{ForecastReport, ForecastSummary, RunDiagnostics, SelectedOrder};
pub use scheduler::{JobError, JobOutcome, LocalScheduler, Scheduler};
pub use seasonal::SeasonalProfile;
pub use stationarity::StationarityReport;
