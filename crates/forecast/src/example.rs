//! Deterministic demo series for trying the engine without real data.

use chrono::{Datelike, Months, NaiveDate};

use stockcast_core::{EngineError, EngineResult, Observation, TimeSeries};

/// Demo demand shape per calendar month (January first), peaking in December.
pub const MONTH_FACTORS: [f64; 12] = [0.8, 0.7, 0.9, 1.0, 1.1, 1.2, 1.3, 1.2, 1.1, 0.9, 1.0, 1.5];

/// Builder for a monthly example series: `(mean + i * trend) * month_factor`,
/// floored at zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExampleSeries {
    start: NaiveDate,
    periods: u32,
    mean: f64,
    trend: f64,
    seasonal: bool,
}

impl Default for ExampleSeries {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN),
            periods: 24,
            mean: 100.0,
            trend: 0.5,
            seasonal: true,
        }
    }
}

impl ExampleSeries {
    pub fn starting(mut self, start: NaiveDate) -> Self {
        self.start = start;
        self
    }

    pub fn periods(mut self, periods: u32) -> Self {
        self.periods = periods;
        self
    }

    pub fn mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    pub fn trend(mut self, trend: f64) -> Self {
        self.trend = trend;
        self
    }

    pub fn seasonal(mut self, seasonal: bool) -> Self {
        self.seasonal = seasonal;
        self
    }

    pub fn build(&self) -> EngineResult<TimeSeries> {
        let observations = (0..self.periods)
            .map(|i| {
                let date = self.start.checked_add_months(Months::new(i)).ok_or_else(|| {
                    EngineError::validation(format!("example date overflow at period {i}"))
                })?;
                let factor = if self.seasonal {
                    MONTH_FACTORS[date.month0() as usize]
                } else {
                    1.0
                };
                let value = ((self.mean + i as f64 * self.trend) * factor).max(0.0);
                Observation::new(date, value)
            })
            .collect::<EngineResult<Vec<_>>>()?;

        TimeSeries::new(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_example_is_two_years_monthly() {
        let series = ExampleSeries::default().build().unwrap();

        assert_eq!(series.len(), 24);
        assert_eq!(series.first().date(), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(series.last().date(), NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        // January of year one: 100 * 0.8
        assert!((series.first().value() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn flat_example_without_seasonality() {
        let series = ExampleSeries::default()
            .periods(6)
            .mean(500.0)
            .trend(10.0)
            .seasonal(false)
            .build()
            .unwrap();

        assert_eq!(series.values(), vec![500.0, 510.0, 520.0, 530.0, 540.0, 550.0]);
    }

    #[test]
    fn negative_levels_are_floored() {
        let series = ExampleSeries::default()
            .periods(3)
            .mean(5.0)
            .trend(-10.0)
            .seasonal(false)
            .build()
            .unwrap();
        assert_eq!(series.values(), vec![5.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_periods_is_empty_series() {
        assert_eq!(
            ExampleSeries::default().periods(0).build(),
            Err(EngineError::EmptySeries)
        );
    }
}
