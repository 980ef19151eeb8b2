//! `stockcast-ingest`
//!
//! **Responsibility:** turn row objects produced by an external table/CSV
//! parser into a typed, chronologically sorted [`stockcast_core::TimeSeries`].
//!
//! No schema is required: the date and value columns are auto-detected from
//! the first row's keys.

pub mod columns;
pub mod ingestor;
pub mod parse;

pub use columns::{ColumnResolver, ColumnRule, Resolution, ResolvedColumn};
pub use ingestor::{
    DEFAULT_MAX_OBSERVATIONS, DroppedRows, IngestLimits, IngestReport, Ingestor, RawRow, ingest,
};
