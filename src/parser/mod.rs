//! Augmented log parsing and contact classification.
//!
//! This module handles:
//! - Splitting log lines into named fields
//! - Resolving bust-corrected counterparties
//! - Classifying W stations

pub mod augmented_log;
pub mod schema;

// Re-export main types
pub use augmented_log::{open_log, parse_line, records, resolve_counterparty};
pub use schema::{is_w, ContactRecord, QsoFlags};
