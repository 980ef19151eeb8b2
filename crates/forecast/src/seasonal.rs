//! Monthly multiplicative seasonal factors.

use chrono::Datelike;
use serde::Serialize;

use stockcast_core::TimeSeries;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SeasonalProfile {
    /// Index 0 is January.
    factors: [f64; 12],
    /// `false` when the series was too short and every factor is 1.0.
    fitted: bool,
}

impl Default for SeasonalProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

impl SeasonalProfile {
    pub fn neutral() -> Self {
        Self {
            factors: [1.0; 12],
            fitted: false,
        }
    }

    /// `factor[m] = mean(month m) / mean(all)`. Months with no observations,
    /// or whose observations average zero, keep a factor of 1.0.
    pub fn estimate(series: &TimeSeries, min_observations: usize) -> Self {
        if series.len() < min_observations {
            return Self::neutral();
        }

        let mut sums = [0.0f64; 12];
        let mut counts = [0usize; 12];
        for obs in series.iter() {
            let m = obs.date().month0() as usize;
            sums[m] += obs.value();
            counts[m] += 1;
        }

        let overall = sums.iter().sum::<f64>() / series.len() as f64;
        if overall == 0.0 || !overall.is_finite() {
            return Self::neutral();
        }

        let mut factors = [1.0f64; 12];
        for m in 0..12 {
            let ratio = if counts[m] > 0 {
                (sums[m] / counts[m] as f64) / overall
            } else {
                0.0
            };
            if ratio != 0.0 && ratio.is_finite() {
                factors[m] = ratio;
            }
        }

        Self {
            factors,
            fitted: true,
        }
    }

    /// Factor for a calendar month (1 through 12); 1.0 outside that range.
    pub fn factor(&self, month: u32) -> f64 {
        match month {
            1..=12 => self.factors[(month - 1) as usize],
            _ => 1.0,
        }
    }

    pub fn factors(&self) -> &[f64; 12] {
        &self.factors
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }
}
