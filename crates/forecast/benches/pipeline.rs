use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use stockcast_core::{Mode, RunConfig};
use stockcast_forecast::{ExampleSeries, ForecastJob, LocalScheduler, Scheduler, run};

fn bench_single_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");

    for periods in [24u32, 120, 365] {
        let series = ExampleSeries::default()
            .periods(periods)
            .build()
            .expect("example series");
        let config = RunConfig::default()
            .with_horizon_steps(12)
            .with_mode(Mode::Advanced);

        group.bench_with_input(BenchmarkId::from_parameter(periods), &series, |b, series| {
            b.iter(|| run(black_box(series), black_box(&config)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let jobs: Vec<ForecastJob> = (0..32)
        .map(|k| {
            let series = ExampleSeries::default()
                .mean(50.0 + k as f64)
                .build()
                .expect("example series");
            ForecastJob::new(format!("sku-{k}"), series, RunConfig::default())
        })
        .collect();

    c.bench_function("batch_32_jobs", |b| {
        let scheduler = LocalScheduler::default();
        b.iter(|| scheduler.run_batch(black_box(&jobs)))
    });
}

criterion_group!(benches, bench_single_run, bench_batch);
criterion_main!(benches);
