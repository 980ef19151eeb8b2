//! Per-run configuration and forecasting policy parameters.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

pub const MAX_HORIZON_STEPS: u32 = 12;
pub const MAX_WINDOW_SIZE: usize = 6;

/// Forecast mode.
///
/// `Advanced` keeps its historical name but is still a trend + seasonal
/// baseline: it adds differencing and an order-selection diagnostic to the run
/// report without changing the numbers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Basic,
    Advanced,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Advanced => "advanced",
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Mode::Basic),
            "advanced" => Ok(Mode::Advanced),
            other => Err(EngineError::invalid_config(format!(
                "mode must be 'basic' or 'advanced', got '{other}'"
            ))),
        }
    }
}

/// Tunable constants of the heuristic model.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPolicy {
    /// Number of trailing observations the trend slope is measured over.
    pub trend_window: usize,
    /// Half-over-half mean shift (percent) at or above which a series counts as non-stationary.
    pub stationarity_threshold_pct: f64,
    /// Relative band half-width at one step ahead; grows with `sqrt(t)`.
    pub uncertainty_coefficient: f64,
    /// Minimum observations before monthly seasonal factors are estimated.
    pub seasonal_min_observations: usize,
    /// Series length from which the order selector picks `p = q = 2`.
    pub long_series_threshold: usize,
}

impl Default for ForecastPolicy {
    fn default() -> Self {
        Self {
            trend_window: 6,
            stationarity_threshold_pct: 10.0,
            uncertainty_coefficient: 0.1,
            seasonal_min_observations: 12,
            long_series_threshold: 24,
        }
    }
}

impl ForecastPolicy {
    pub fn validate(&self) -> EngineResult<()> {
        if self.trend_window == 0 {
            return Err(EngineError::invalid_config("trend_window must be >= 1"));
        }
        if !(self.stationarity_threshold_pct.is_finite() && self.stationarity_threshold_pct > 0.0) {
            return Err(EngineError::invalid_config(
                "stationarity_threshold_pct must be a finite positive number",
            ));
        }
        if !(self.uncertainty_coefficient.is_finite() && self.uncertainty_coefficient >= 0.0) {
            return Err(EngineError::invalid_config(
                "uncertainty_coefficient must be a finite non-negative number",
            ));
        }
        if self.seasonal_min_observations == 0 {
            return Err(EngineError::invalid_config(
                "seasonal_min_observations must be >= 1",
            ));
        }
        Ok(())
    }
}

/// Caller-supplied settings for one forecast run.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub horizon_steps: u32,
    /// Baseline window (observations), capped at [`MAX_WINDOW_SIZE`].
    pub window_size: usize,
    pub safety_stock_pct: f64,
    pub starting_inventory: f64,
    pub mode: Mode,
    #[serde(default)]
    pub policy: ForecastPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            horizon_steps: 3,
            window_size: MAX_WINDOW_SIZE,
            safety_stock_pct: 20.0,
            starting_inventory: 100.0,
            mode: Mode::Basic,
            policy: ForecastPolicy::default(),
        }
    }
}

impl RunConfig {
    pub fn with_horizon_steps(mut self, steps: u32) -> Self {
        self.horizon_steps = steps;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_safety_stock_pct(mut self, pct: f64) -> Self {
        self.safety_stock_pct = pct;
        self
    }

    pub fn with_starting_inventory(mut self, units: f64) -> Self {
        self.starting_inventory = units;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_policy(mut self, policy: ForecastPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reject out-of-range settings before any computation starts.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=MAX_HORIZON_STEPS).contains(&self.horizon_steps) {
            return Err(EngineError::invalid_config(format!(
                "horizon_steps must be in 1..={MAX_HORIZON_STEPS}, got {}",
                self.horizon_steps
            )));
        }
        if !(1..=MAX_WINDOW_SIZE).contains(&self.window_size) {
            return Err(EngineError::invalid_config(format!(
                "window_size must be in 1..={MAX_WINDOW_SIZE}, got {}",
                self.window_size
            )));
        }
        if !(self.safety_stock_pct.is_finite() && (0.0..=100.0).contains(&self.safety_stock_pct)) {
            return Err(EngineError::invalid_config(format!(
                "safety_stock_pct must be in 0..=100, got {}",
                self.safety_stock_pct
            )));
        }
        if !(self.starting_inventory.is_finite() && self.starting_inventory >= 0.0) {
            return Err(EngineError::invalid_config(format!(
                "starting_inventory must be a finite number >= 0, got {}",
                self.starting_inventory
            )));
        }
        self.policy.validate()
    }
}
