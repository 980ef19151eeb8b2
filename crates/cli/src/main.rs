//! `stockcast [--example] [FILE...]`
//!
//! Each FILE holds a JSON array of row objects and is forecast as its own job.
//! Reports go to stdout as pretty JSON; logs go to stderr.

mod config;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{error, info};

use stockcast_core::RunConfig;
use stockcast_forecast::{
    ExampleSeries, ForecastJob, ForecastReport, JobOutcome, LocalScheduler, Scheduler,
};
use stockcast_ingest::{DroppedRows, IngestReport, Ingestor, RawRow, ResolvedColumn};

use crate::config::CliConfig;

const USAGE: &str = "usage: stockcast [--example] [FILE...]";

/// How a file's rows became a series.
#[derive(Debug, Serialize)]
struct InputSummary {
    date_column: ResolvedColumn,
    value_column: ResolvedColumn,
    rows_read: usize,
    dropped: DroppedRows,
    truncated: usize,
}

impl From<&IngestReport> for InputSummary {
    fn from(report: &IngestReport) -> Self {
        Self {
            date_column: report.date_column.clone(),
            value_column: report.value_column.clone(),
            rows_read: report.rows_read,
            dropped: report.dropped,
            truncated: report.truncated,
        }
    }
}

#[derive(Debug, Serialize)]
struct JobOutput<'a> {
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a InputSummary>,
    report: &'a ForecastReport,
}

#[derive(Debug)]
struct Args {
    example: bool,
    files: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        example: false,
        files: Vec::new(),
    };
    for arg in args {
        match arg.as_str() {
            "--example" => parsed.example = true,
            "-h" | "--help" => bail!("{USAGE}"),
            flag if flag.starts_with('-') => bail!("unknown flag '{flag}'\n{USAGE}"),
            _ => parsed.files.push(arg),
        }
    }
    if !parsed.example && parsed.files.is_empty() {
        bail!("no input given\n{USAGE}");
    }
    Ok(parsed)
}

fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of row objects", path.display()))
}

/// Jobs built from input files, plus the files that could not become a series.
struct Prepared<'a> {
    jobs: Vec<ForecastJob>,
    inputs: HashMap<&'a str, InputSummary>,
    failures: Vec<(&'a str, anyhow::Error)>,
}

/// Load and ingest each file independently; one unusable file does not stop the others.
fn prepare_files<'a>(files: &'a [String], ingestor: &Ingestor, run: RunConfig) -> Prepared<'a> {
    let mut prepared = Prepared {
        jobs: Vec::with_capacity(files.len()),
        inputs: HashMap::new(),
        failures: Vec::new(),
    };

    for file in files {
        let ingested = load_rows(Path::new(file)).and_then(|rows| {
            ingestor
                .ingest(&rows)
                .with_context(|| format!("no usable observations in {file}"))
        });
        match ingested {
            Ok(ingested) => {
                prepared.inputs.insert(file.as_str(), InputSummary::from(&ingested));
                prepared
                    .jobs
                    .push(ForecastJob::new(file.clone(), ingested.series, run));
            }
            Err(err) => {
                error!(job = %file, error = %format!("{err:#}"), "input rejected");
                prepared.failures.push((file.as_str(), err));
            }
        }
    }
    prepared
}

fn main() -> Result<()> {
    stockcast_observability::init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = CliConfig::from_env()?;
    let ingestor = Ingestor::new().with_limits(config.limits);

    let mut jobs = Vec::new();
    if args.example {
        let series = ExampleSeries::default()
            .build()
            .context("failed to build example series")?;
        jobs.push(ForecastJob::new("example", series, config.run));
    }
    let Prepared {
        jobs: file_jobs,
        inputs,
        failures,
    } = prepare_files(&args.files, &ingestor, config.run);
    jobs.extend(file_jobs);

    info!(jobs = jobs.len(), mode = %config.run.mode, "starting forecast runs");
    let outcomes = LocalScheduler::new(config.max_parallel).run_batch(&jobs);

    let mut outputs = Vec::with_capacity(outcomes.len());
    let mut failed = failures.len();
    for JobOutcome { key, result } in &outcomes {
        match result {
            Ok(report) => outputs.push(JobOutput {
                key,
                input: inputs.get(key.as_str()),
                report,
            }),
            Err(err) => {
                error!(job = %key, error = %err, "forecast failed");
                failed += 1;
            }
        }
    }

    let rendered = serde_json::to_string_pretty(&outputs).context("failed to render report")?;
    println!("{rendered}");

    if failed > 0 {
        bail!("{failed} of {} job(s) failed", outcomes.len() + failures.len());
    }
    Ok(())
}
