//! Output writers for the ranked tables.
//!
//! This module renders report tables as embeddable HTML fragments.

pub mod html;

// Re-export main functions
pub use html::{format_percentage, render_report, render_table};
