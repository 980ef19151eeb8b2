use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use tracing::debug;

use stockcast_core::{EngineError, EngineResult, ForecastHorizon, ForecastPoint};

use crate::seasonal::SeasonalProfile;

/// Fitted structure the projection is built from.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ForecastComponents {
    pub baseline: f64,
    pub trend: f64,
    pub profile: SeasonalProfile,
}

/// Projects `(baseline + trend * t) * season` forward with a band that widens
/// with `sqrt(t)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Forecaster {
    uncertainty_coefficient: f64,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl Forecaster {
    pub fn new(uncertainty_coefficient: f64) -> Self {
        Self {
            uncertainty_coefficient,
        }
    }

    /// One point per month for `steps` months after `last_date`.
    ///
    /// Month arithmetic clamps to the end of shorter months (Jan 31 + 1 month is
    /// Feb 28/29). Negative projections are floored at zero demand.
    pub fn project(
        &self,
        last_date: NaiveDate,
        components: &ForecastComponents,
        steps: u32,
    ) -> EngineResult<ForecastHorizon> {
        let mut points = Vec::with_capacity(steps as usize);

        for t in 1..=steps {
            let date = last_date.checked_add_months(Months::new(t)).ok_or_else(|| {
                EngineError::validation(format!("cannot step {t} month(s) past {last_date}"))
            })?;
            let season = components.profile.factor(date.month());
            let raw = (components.baseline + components.trend * t as f64) * season;
            let point = raw.max(0.0);

            let uncertainty = self.uncertainty_coefficient * point * (t as f64).sqrt();
            let lower = (point - uncertainty).max(0.0);
            let upper = point + uncertainty;

            debug!(step = t, %date, season, point, lower, upper, "projected step");
            points.push(ForecastPoint::new(date, point, lower, upper)?);
        }

        ForecastHorizon::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn flat(baseline: f64, trend: f64) -> ForecastComponents {
        ForecastComponents {
            baseline,
            trend,
            profile: SeasonalProfile::neutral(),
        }
    }

    #[test]
    fn steps_are_monthly_after_last_observation() {
        let horizon = Forecaster::default()
            .project(date(2024, 12, 1), &flat(100.0, 0.0), 3)
            .unwrap();
        let dates: Vec<_> = horizon.iter().map(|p| p.date()).collect();

        assert_eq!(dates, vec![date(2025, 1, 1), date(2025, 2, 1), date(2025, 3, 1)]);
    }

    #[test]
    fn month_end_dates_clamp() {
        let horizon = Forecaster::default()
            .project(date(2024, 1, 31), &flat(10.0, 0.0), 2)
            .unwrap();
        assert_eq!(horizon.points()[0].date(), date(2024, 2, 29));
        assert_eq!(horizon.points()[1].date(), date(2024, 3, 31));
    }

    #[test]
    fn band_widens_with_square_root_of_distance() {
        let horizon = Forecaster::default()
            .project(date(2024, 1, 1), &flat(100.0, 0.0), 4)
            .unwrap();
        let p = horizon.points();

        assert!((p[0].upper() - 110.0).abs() < 1e-9);
        assert!((p[0].lower() - 90.0).abs() < 1e-9);
        assert!((p[3].upper() - 120.0).abs() < 1e-9);
        assert!((p[3].lower() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn trend_and_season_are_applied() {
        let mut levels = [1.0; 12];
        levels[1] = 2.0;
        let values: Vec<f64> = levels.iter().map(|f| f * 10.0).collect();
        let profile = SeasonalProfile::estimate(&crate::test_support::monthly_series(&values), 12);
        let components = ForecastComponents {
            baseline: 50.0,
            trend: 5.0,
            profile,
        };

        // Last observation in December, so step 2 lands in February.
        let horizon = Forecaster::default()
            .project(date(2023, 12, 1), &components, 2)
            .unwrap();
        let feb = horizon.points()[1];
        let expected = (50.0 + 5.0 * 2.0) * profile.factor(2);

        assert_eq!(feb.date().month(), 2);
        assert!((feb.point() - expected).abs() < 1e-9);
        assert!(profile.factor(2) > 1.0);
    }

    #[test]
    fn negative_projection_is_floored_at_zero() {
        let horizon = Forecaster::default()
            .project(date(2024, 1, 1), &flat(10.0, -8.0), 3)
            .unwrap();
        let last = horizon.points()[2];

        assert_eq!(last.point(), 0.0);
        assert_eq!(last.lower(), 0.0);
        assert_eq!(last.upper(), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the band is ordered and never negative.
        #[test]
        fn band_is_ordered_and_non_negative(
            baseline in -500.0f64..5_000.0,
            trend in -200.0f64..200.0,
            steps in 1u32..=12,
        ) {
            let horizon = Forecaster::default()
                .project(date(2024, 6, 15), &flat(baseline, trend), steps)
                .unwrap();
            prop_assert_eq!(horizon.len(), steps as usize);
            for p in horizon.iter() {
                prop_assert!(p.lower() >= 0.0);
                prop_assert!(p.lower() <= p.point() && p.point() <= p.upper());
            }
        }

        /// Property: with a non-negative trend the band never narrows.
        #[test]
        fn band_width_is_non_decreasing(
            baseline in 0.0f64..5_000.0,
            trend in 0.0f64..200.0,
            steps in 1u32..=12,
        ) {
            let horizon = Forecaster::default()
                .project(date(2024, 6, 15), &flat(baseline, trend), steps)
                .unwrap();
            let widths: Vec<f64> = horizon.iter().map(|p| p.band_width()).collect();
            prop_assert!(widths.windows(2).all(|w| w[1] >= w[0] - 1e-9));
        }
    }
}
