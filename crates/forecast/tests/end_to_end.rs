//! End-to-end: raw rows -> ingest -> forecast -> replenishment plan.

use chrono::{Months, NaiveDate};
use serde_json::{Value, json};

use stockcast_core::{EngineError, Mode, RunConfig};
use stockcast_forecast::{ExampleSeries, ForecastJob, LocalScheduler, Scheduler, run};
use stockcast_ingest::{RawRow, ingest};

fn monthly_rows(values: &[f64]) -> Vec<RawRow> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let date = start.checked_add_months(Months::new(i as u32)).unwrap();
            let mut row = RawRow::new();
            row.insert("date".to_string(), json!(date.to_string()));
            row.insert("sales".to_string(), json!(v));
            row
        })
        .collect()
}

#[test]
fn flat_demand_scenario() {
    let series = ingest(&monthly_rows(&[100.0; 24])).unwrap().series;
    let config = RunConfig::default()
        .with_horizon_steps(3)
        .with_safety_stock_pct(20.0)
        .with_starting_inventory(100.0);

    let report = run(&series, &config).unwrap();

    assert_eq!(report.forecast.len(), 3);
    for point in report.forecast.iter() {
        assert!((point.point() - 100.0).abs() < 1e-9);
        assert!(point.lower() < point.point() && point.point() < point.upper());
    }
    assert_eq!(
        report.forecast.points()[0].date(),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    );

    let first = report.recommendations.recommendations()[0];
    assert_eq!(first.period.to_string(), "2025-01");
    assert!((first.safety_stock - 20.0).abs() < 1e-9);
    assert!((first.ideal_inventory - 120.0).abs() < 1e-9);
    assert!((first.units_to_order - 20.0).abs() < 1e-9);
    assert!((first.remaining_inventory - 20.0).abs() < 1e-9);
}

#[test]
fn report_serializes_to_documented_shape() {
    let series = ingest(&monthly_rows(&[100.0; 24])).unwrap().series;
    let report = run(&series, &RunConfig::default()).unwrap();
    let json: Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["forecast"][0]["date"], "2025-01-01");
    assert!(json["forecast"][0]["point"].is_number());
    assert!(json["forecast"][0]["lower"].is_number());
    assert!(json["forecast"][0]["upper"].is_number());

    let rec = &json["recommendations"][2];
    assert_eq!(rec["period"], "2025-03");
    for field in [
        "forecast",
        "safety_stock",
        "ideal_inventory",
        "units_to_order",
        "remaining_inventory",
    ] {
        assert!(rec[field].is_number(), "missing {field}");
    }
    assert_eq!(json["diagnostics"]["mode"], "basic");
}

#[test]
fn seasonal_example_peaks_in_december() {
    let series = ExampleSeries::default().trend(0.0).build().unwrap();
    let config = RunConfig::default()
        .with_horizon_steps(12)
        .with_mode(Mode::Advanced);
    let report = run(&series, &config).unwrap();

    let peak = report
        .forecast
        .iter()
        .max_by(|a, b| a.point().total_cmp(&b.point()))
        .unwrap();
    assert_eq!(peak.period().month(), 12);
    assert!(report.diagnostics.seasonal.is_fitted());
}

#[test]
fn unusable_rows_surface_empty_series() {
    let rows: Vec<RawRow> = serde_json::from_value(json!([
        { "Timestamp": "2023-01-01", "Revenue": "n/a" }
    ]))
    .unwrap();

    assert_eq!(ingest(&rows).unwrap_err(), EngineError::EmptySeries);
}

#[test]
fn batch_of_independent_series() {
    let jobs: Vec<ForecastJob> = [10.0, 20.0, 30.0]
        .iter()
        .map(|level| {
            let series = ingest(&monthly_rows(&[*level; 12])).unwrap().series;
            ForecastJob::new(format!("level-{level}"), series, RunConfig::default())
        })
        .collect();

    let outcomes = LocalScheduler::new(2).run_batch(&jobs);

    let firsts: Vec<f64> = outcomes
        .iter()
        .map(|o| o.result.as_ref().unwrap().forecast.points()[0].point())
        .collect();
    assert_eq!(outcomes[1].key, "level-20");
    for (got, want) in firsts.iter().zip([10.0, 20.0, 30.0]) {
        assert!((got - want).abs() < 1e-9);
    }
}
