//! Observations and the chronologically ordered series built from them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::value_object::ValueObject;

/// A single dated sales observation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Observation {
    date: NaiveDate,
    value: f64,
}

impl Observation {
    /// Create an observation. The value must be finite.
    pub fn new(date: NaiveDate, value: f64) -> EngineResult<Self> {
        if !value.is_finite() {
            return Err(EngineError::validation(format!(
                "observation on {date} has non-finite value {value}"
            )));
        }
        Ok(Self { date, value })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl ValueObject for Observation {}

/// Non-empty series of observations, sorted ascending by date.
///
/// Sorting happens once at construction and is stable, so observations sharing
/// a date keep their input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimeSeries {
    observations: Vec<Observation>,
}

impl TimeSeries {
    pub fn new(mut observations: Vec<Observation>) -> EngineResult<Self> {
        if observations.is_empty() {
            return Err(EngineError::EmptySeries);
        }
        observations.sort_by_key(|o| o.date);
        Ok(Self { observations })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    /// Observation values in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always `false` for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first(&self) -> &Observation {
        &self.observations[0]
    }

    pub fn last(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    /// Keep only the most recent `max` observations.
    pub fn truncate_to_recent(self, max: usize) -> EngineResult<Self> {
        if max == 0 {
            return Err(EngineError::EmptySeries);
        }
        let len = self.observations.len();
        if len <= max {
            return Ok(self);
        }
        Ok(Self {
            observations: self.observations[len - max..].to_vec(),
        })
    }
}
