//! Forecast output types: points, the sorted horizon and year-month periods.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::{EngineError, EngineResult};
use crate::value_object::ValueObject;

/// Calendar period used for replenishment (serialized as `YYYY-MM`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl core::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl ValueObject for YearMonth {}

/// One projected step: point forecast plus its confidence band.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    date: NaiveDate,
    point: f64,
    lower: f64,
    upper: f64,
}

impl ForecastPoint {
    /// Requires `0 <= lower <= point <= upper`, all finite.
    pub fn new(date: NaiveDate, point: f64, lower: f64, upper: f64) -> EngineResult<Self> {
        if !(point.is_finite() && lower.is_finite() && upper.is_finite()) {
            return Err(EngineError::validation(format!(
                "forecast for {date} is not finite (point={point}, lower={lower}, upper={upper})"
            )));
        }
        if !(0.0 <= lower && lower <= point && point <= upper) {
            return Err(EngineError::validation(format!(
                "forecast band for {date} out of order (lower={lower}, point={point}, upper={upper})"
            )));
        }
        Ok(Self {
            date,
            point,
            lower,
            upper,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn point(&self) -> f64 {
        self.point
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn period(&self) -> YearMonth {
        YearMonth::of(self.date)
    }

    pub fn band_width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl ValueObject for ForecastPoint {}

/// Forecast points in strictly increasing date order.
///
/// The only way to build one is through [`ForecastHorizon::new`], which checks
/// the ordering, so consumers that fold over the horizon (the inventory
/// planner) can rely on chronological order without re-sorting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ForecastHorizon {
    points: Vec<ForecastPoint>,
}

impl ForecastHorizon {
    pub fn new(points: Vec<ForecastPoint>) -> EngineResult<Self> {
        if let Some(pair) = points.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(EngineError::validation(format!(
                "forecast points not in chronological order ({} then {})",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &ForecastPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean point forecast, `None` for an empty horizon.
    pub fn mean_point(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().map(|p| p.point).sum::<f64>() / self.points.len() as f64)
    }
}
