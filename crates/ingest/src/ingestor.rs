use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use stockcast_core::{EngineError, EngineResult, Observation, TimeSeries};

use crate::columns::{ColumnResolver, ResolvedColumn};
use crate::parse::{parse_date, parse_value};

/// A row object from an upstream table/CSV parser. Key order is significant.
pub type RawRow = Map<String, Value>;

/// Callers bound input size before a run; this is the recommended cap.
pub const DEFAULT_MAX_OBSERVATIONS: usize = 365;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IngestLimits {
    /// Maximum observations kept; the most recent ones survive truncation.
    pub max_observations: usize,
}

impl Default for IngestLimits {
    fn default() -> Self {
        Self {
            max_observations: DEFAULT_MAX_OBSERVATIONS,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DroppedRows {
    pub unparsable_value: usize,
    pub unparsable_date: usize,
}

impl DroppedRows {
    pub fn total(&self) -> usize {
        self.unparsable_value + self.unparsable_date
    }
}

/// Outcome of ingestion: the series plus an account of how it was built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestReport {
    pub series: TimeSeries,
    pub date_column: ResolvedColumn,
    pub value_column: ResolvedColumn,
    pub rows_read: usize,
    pub dropped: DroppedRows,
    pub truncated: usize,
}

/// Normalizes heterogeneous row objects into a sorted [`TimeSeries`].
#[derive(Debug, Clone)]
pub struct Ingestor {
    date_resolver: ColumnResolver,
    value_resolver: ColumnResolver,
    limits: IngestLimits,
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

impl Ingestor {
    pub fn new() -> Self {
        Self {
            date_resolver: ColumnResolver::date_column(),
            value_resolver: ColumnResolver::value_column(),
            limits: IngestLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: IngestLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_resolvers(mut self, date: ColumnResolver, value: ColumnResolver) -> Self {
        self.date_resolver = date;
        self.value_resolver = value;
        self
    }

    /// Columns are resolved from the first row's keys and applied to every row.
    pub fn ingest(&self, rows: &[RawRow]) -> EngineResult<IngestReport> {
        let first = rows.first().ok_or(EngineError::EmptySeries)?;
        let keys = || first.keys().map(String::as_str);

        let date_column = self.date_resolver.resolve(keys()).ok_or(EngineError::EmptySeries)?;
        let value_column = self.value_resolver.resolve(keys()).ok_or_else(|| {
            warn!("no value column could be resolved from keys {:?}", keys().collect::<Vec<_>>());
            EngineError::EmptySeries
        })?;
        debug!(
            date_column = %date_column.key,
            value_column = %value_column.key,
            "resolved input columns"
        );

        let mut dropped = DroppedRows::default();
        let mut observations = Vec::with_capacity(rows.len());

        for row in rows {
            let Some(value) = row.get(&value_column.key).and_then(parse_value) else {
                dropped.unparsable_value += 1;
                continue;
            };
            let Some(date) = row.get(&date_column.key).and_then(parse_date) else {
                dropped.unparsable_date += 1;
                continue;
            };
            observations.push(Observation::new(date, value)?);
        }

        if dropped.total() > 0 {
            warn!(
                unparsable_value = dropped.unparsable_value,
                unparsable_date = dropped.unparsable_date,
                "dropped {} of {} input row(s)",
                dropped.total(),
                rows.len()
            );
        }

        let series = TimeSeries::new(observations)?;
        let before = series.len();
        let series = series.truncate_to_recent(self.limits.max_observations)?;
        let truncated = before - series.len();
        if truncated > 0 {
            warn!(
                max_observations = self.limits.max_observations,
                "truncated {truncated} oldest observation(s)"
            );
        }

        Ok(IngestReport {
            series,
            date_column,
            value_column,
            rows_read: rows.len(),
            dropped,
            truncated,
        })
    }
}

/// Ingest with default rules and limits.
pub fn ingest(rows: &[RawRow]) -> EngineResult<IngestReport> {
    Ingestor::new().ingest(rows)
}
