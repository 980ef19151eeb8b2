//! `stockcast-core`: domain foundation for the forecasting engine.
//!
//! This crate contains **pure** primitives shared by every stage (no IO, no
//! logging setup): the validated time series, forecast output types, run
//! configuration and the engine error model.

pub mod config;
pub mod error;
pub mod horizon;
pub mod series;
pub mod value_object;

pub use config::{ForecastPolicy, MAX_HORIZON_STEPS, MAX_WINDOW_SIZE, Mode, RunConfig};
pub use error::{EngineError, EngineResult};
pub use horizon::{ForecastHorizon, ForecastPoint, YearMonth};
pub use series::{Observation, TimeSeries};
pub use value_object::ValueObject;
