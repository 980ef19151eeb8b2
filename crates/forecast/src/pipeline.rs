//! Forecast run as an explicit sequence of stages.
//!
//! A [`RunState`] is threaded through the stages by value: each stage consumes
//! the previous state and returns a new one carrying its result, so the stage
//! order is enforced by the types and nothing is mutated behind the caller's
//! back.
//!
//! ```text
//! Started -> Analyzed -> Fitted -> Projected -> ForecastReport
//! ```

use tracing::{debug, info};

use stockcast_core::{EngineResult, ForecastHorizon, Mode, RunConfig, TimeSeries};
use stockcast_inventory::{ReplenishmentPolicy, plan};

use crate::differencing::DifferencedSeries;
use crate::forecaster::{ForecastComponents, Forecaster};
use crate::level::{baseline, trend};
use crate::order::{HeuristicOrderSelector, OrderSelector};
use crate::report::{ForecastReport, ForecastSummary, RunDiagnostics, SelectedOrder};
use crate::seasonal::SeasonalProfile;
use crate::stationarity::{StationarityReport, assess};

#[derive(Debug, Clone)]
pub struct RunState<'a, S> {
    series: &'a TimeSeries,
    config: &'a RunConfig,
    log: Vec<String>,
    stage: S,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Started;

#[derive(Debug, Clone, PartialEq)]
pub struct Analyzed {
    pub stationarity: StationarityReport,
    pub differenced: Option<DifferencedSeries>,
    pub selected_order: Option<SelectedOrder>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fitted {
    pub analysis: Analyzed,
    pub components: ForecastComponents,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projected {
    pub fitted: Fitted,
    pub forecast: ForecastHorizon,
}

impl<'a, S> RunState<'a, S> {
    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Record an analysis log line without changing stage.
    fn note(mut self, line: String) -> Self {
        debug!("{line}");
        self.log.push(line);
        self
    }

    /// Move to the next stage, built from the current one.
    fn advance<T>(self, line: String, next: impl FnOnce(S) -> T) -> RunState<'a, T> {
        let state = self.note(line);
        RunState {
            series: state.series,
            config: state.config,
            log: state.log,
            stage: next(state.stage),
        }
    }
}

impl<'a> RunState<'a, Started> {
    /// Validates the configuration; nothing is computed before it passes.
    pub fn new(series: &'a TimeSeries, config: &'a RunConfig) -> EngineResult<Self> {
        config.validate()?;
        let state = Self {
            series,
            config,
            log: Vec::new(),
            stage: Started,
        };
        Ok(state.note(format!(
            "loaded {} observation(s) from {} to {}; {} mode, {} step(s)",
            series.len(),
            series.first().date(),
            series.last().date(),
            config.mode,
            config.horizon_steps
        )))
    }

    /// Stationarity in every mode; differencing and order selection in
    /// advanced mode only. Neither of the latter feeds the forecast.
    pub fn analyze(self, selector: &dyn OrderSelector) -> RunState<'a, Analyzed> {
        let stationarity = assess(self.series, self.config.policy.stationarity_threshold_pct);
        let verdict = if stationarity.stationary {
            "stationary"
        } else {
            "non-stationary"
        };
        let state = self.note(format!(
            "stationarity: first-half avg {:.2}, second-half avg {:.2}, change {:.2}% -> {verdict}",
            stationarity.first_avg, stationarity.second_avg, stationarity.percent_change
        ));

        if state.config.mode == Mode::Basic {
            return state.advance("order selection skipped (basic mode)".to_string(), |_| Analyzed {
                stationarity,
                differenced: None,
                selected_order: None,
            });
        }

        let (differenced, state) = if stationarity.stationary {
            (None, state)
        } else {
            let d = DifferencedSeries::compute(&state.series.values(), 1);
            let line = format!(
                "applied first-order differencing for assessment ({} value(s)); forecast still uses the raw series",
                d.len()
            );
            (Some(d), state.note(line))
        };

        let order = selector.select(state.series, &stationarity);
        let selected = SelectedOrder {
            selector: selector.name(),
            order,
        };
        info!(order = %order, selector = selected.selector, "selected model order");

        let line = format!(
            "selected {order} via {} selector (informational; projection uses trend + seasonal baseline)",
            selected.selector
        );
        state.advance(line, |_| Analyzed {
            stationarity,
            differenced,
            selected_order: Some(selected),
        })
    }
}

impl<'a> RunState<'a, Analyzed> {
    pub fn fit(self) -> EngineResult<RunState<'a, Fitted>> {
        let policy = self.config.policy;
        let values = self.series.values();

        let profile = SeasonalProfile::estimate(self.series, policy.seasonal_min_observations);
        let components = ForecastComponents {
            baseline: baseline(&values, self.config.window_size)?,
            trend: trend(&values, policy.trend_window),
            profile,
        };

        let state = if profile.is_fitted() {
            self.note("estimated monthly seasonal factors".to_string())
        } else {
            self.note(format!(
                "seasonal factors left neutral (need {} observation(s), have {})",
                policy.seasonal_min_observations,
                values.len()
            ))
        };
        let line = format!(
            "baseline {:.2} (window {}), trend {:+.4} per period (window {})",
            components.baseline,
            state.config.window_size.min(values.len()),
            components.trend,
            policy.trend_window.min(values.len())
        );

        Ok(state.advance(line, |analysis| Fitted {
            analysis,
            components,
        }))
    }
}

impl<'a> RunState<'a, Fitted> {
    pub fn project(self) -> EngineResult<RunState<'a, Projected>> {
        let forecaster = Forecaster::new(self.config.policy.uncertainty_coefficient);
        let last_date = self.series.last().date();
        let forecast = forecaster.project(last_date, &self.stage.components, self.config.horizon_steps)?;
        let line = format!("projected {} step(s) after {last_date}", forecast.len());

        Ok(self.advance(line, |fitted| Projected { fitted, forecast }))
    }
}

impl<'a> RunState<'a, Projected> {
    /// Run the inventory fold and assemble the report.
    pub fn finish(self) -> EngineResult<ForecastReport> {
        let policy = ReplenishmentPolicy::new(
            self.config.safety_stock_pct,
            self.config.starting_inventory,
        )?;
        let recommendations = plan(&self.stage.forecast, &policy);
        let summary = ForecastSummary::compute(self.series, &self.stage.forecast, &recommendations);

        let line = format!(
            "planned {} period(s): {:.2} unit(s) to order, safety stock {}%",
            recommendations.len(),
            summary.total_units_to_order,
            self.config.safety_stock_pct
        );
        let state = self.note(line);
        let RunState {
            series,
            config,
            log,
            stage: Projected { fitted, forecast },
        } = state;
        let Fitted {
            analysis,
            components,
        } = fitted;

        info!(
            observations = series.len(),
            steps = forecast.len(),
            mode = %config.mode,
            future_avg = summary.future_avg,
            total_units_to_order = summary.total_units_to_order,
            "forecast run complete"
        );

        Ok(ForecastReport {
            forecast,
            recommendations,
            summary,
            diagnostics: RunDiagnostics {
                mode: config.mode,
                observations: series.len(),
                stationarity: analysis.stationarity,
                differenced: analysis.differenced,
                selected_order: analysis.selected_order,
                seasonal: components.profile,
                baseline: components.baseline,
                trend: components.trend,
                log,
            },
        })
    }
}

/// Run the full pipeline with the heuristic order selector.
pub fn run(series: &TimeSeries, config: &RunConfig) -> EngineResult<ForecastReport> {
    let selector = HeuristicOrderSelector::new(config.policy.long_series_threshold);
    run_with_selector(series, config, &selector)
}

pub fn run_with_selector(
    series: &TimeSeries,
    config: &RunConfig,
    selector: &dyn OrderSelector,
) -> EngineResult<ForecastReport> {
    RunState::new(series, config)?
        .analyze(selector)
        .fit()?
        .project()?
        .finish()
}
