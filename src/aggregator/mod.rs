//! Aggregation of contacts into per-station counters and ranked tables.
//!
//! This module transforms classified contacts into:
//! - Per-counterparty rQSO/rNIL counters
//! - Filtered, ranked station lists for each report table

pub mod ranking;
pub mod tally;

// Re-export main types and functions
pub use ranking::{
    build_tables, filter_stations, rank, Pipeline, RankedTable, Ranking, StationRow, TableKind,
};
pub use tally::{StationAggregate, StationTally};
