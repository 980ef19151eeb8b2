//! Environment-driven configuration for the `stockcast` binary.

use core::fmt::Display;
use core::str::FromStr;

use anyhow::{Context, Result, anyhow};

use stockcast_core::{Mode, RunConfig};
use stockcast_ingest::{DEFAULT_MAX_OBSERVATIONS, IngestLimits};

pub const HORIZON: &str = "STOCKCAST_HORIZON";
pub const WINDOW: &str = "STOCKCAST_WINDOW";
pub const SAFETY_STOCK_PCT: &str = "STOCKCAST_SAFETY_STOCK_PCT";
pub const STARTING_INVENTORY: &str = "STOCKCAST_STARTING_INVENTORY";
pub const MODE: &str = "STOCKCAST_MODE";
pub const MAX_OBSERVATIONS: &str = "STOCKCAST_MAX_OBSERVATIONS";
pub const MAX_PARALLEL: &str = "STOCKCAST_MAX_PARALLEL";

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CliConfig {
    pub run: RunConfig,
    pub limits: IngestLimits,
    pub max_parallel: usize,
}

impl CliConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = RunConfig::default();

        let run = RunConfig::default()
            .with_horizon_steps(var(&lookup, HORIZON, defaults.horizon_steps)?)
            .with_window_size(var(&lookup, WINDOW, defaults.window_size)?)
            .with_safety_stock_pct(var(&lookup, SAFETY_STOCK_PCT, defaults.safety_stock_pct)?)
            .with_starting_inventory(var(
                &lookup,
                STARTING_INVENTORY,
                defaults.starting_inventory,
            )?)
            .with_mode(var::<Mode>(&lookup, MODE, defaults.mode)?);
        run.validate().context("invalid run configuration")?;

        let max_observations = var(&lookup, MAX_OBSERVATIONS, DEFAULT_MAX_OBSERVATIONS)?;
        if max_observations == 0 {
            return Err(anyhow!("{MAX_OBSERVATIONS} must be >= 1"));
        }

        let max_parallel = var(&lookup, MAX_PARALLEL, 4usize)?;
        if max_parallel == 0 {
            return Err(anyhow!("{MAX_PARALLEL} must be >= 1"));
        }

        Ok(Self {
            run,
            limits: IngestLimits { max_observations },
            max_parallel,
        })
    }
}

fn var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            tracing::debug!("{key} not set; using default {default}");
            Ok(default)
        }
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err| anyhow!("{key}={raw:?} is not valid: {err}")),
    }
}
