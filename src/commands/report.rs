//! Report command implementation.
//!
//! The report command:
//! 1. Reads and parses the augmented log
//! 2. Tallies rQSOs and rNILs per counterparty
//! 3. Filters and ranks the four tables
//! 4. Renders the HTML fragments
//!
//! Nothing is printed until every table has been built, so a failure leaves
//! stdout empty.

use crate::aggregator::{build_tables, RankedTable, Ranking, StationTally};
use crate::output::render_report;
use crate::parser::{open_log, records};
use crate::utils::config::{ReportConfig, ShortfallPolicy};
use crate::utils::error::ReportError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Augmented log to read
    pub log_file: PathBuf,

    /// Use the alternate ("green") background colour
    pub use_alt_palette: bool,

    /// Thresholds, row count and colours
    pub config: ReportConfig,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            log_file: PathBuf::new(),
            use_alt_palette: false,
            config: ReportConfig::default(),
        }
    }
}

/// Build the full HTML report for a log
///
/// **Public** - main entry point; returns the fragments instead of printing
///
/// # Errors
/// * Log file missing or unreadable
/// * First malformed line in the log
/// * A table short of rows when the shortfall policy is `Fail`
pub fn build_report(args: &ReportArgs) -> Result<String> {
    let start_time = Instant::now();
    let config = &args.config;

    config.validate().context("Invalid report configuration")?;

    info!("Step 1/4: Reading augmented log: {}", args.log_file.display());
    let reader = open_log(&args.log_file)
        .with_context(|| format!("Failed to open log {}", args.log_file.display()))?;

    info!("Step 2/4: Tallying rQSOs per station...");
    let tally = StationTally::from_records(records(reader))
        .with_context(|| format!("Failed to parse log {}", args.log_file.display()))?;

    info!(
        "Parsed {} contacts with {} distinct counterparties",
        tally.contact_count(),
        tally.len()
    );

    info!(
        "Step 3/4: Ranking top {} stations per table...",
        config.rows_per_table
    );
    let tables = build_tables(&tally, config);
    check_shortfall(&tables, config.shortfall)?;

    info!("Step 4/4: Rendering HTML tables...");
    let html = render_report(&tables, config.palette.colour(args.use_alt_palette));

    debug!("Rendered {} bytes of HTML", html.len());
    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(html)
}

/// Build the report and write it to `out`
///
/// **Public** - called from main.rs with stdout
pub fn execute_report(args: &ReportArgs, out: &mut impl Write) -> Result<()> {
    let html = build_report(args)?;

    out.write_all(html.as_bytes())
        .context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    Ok(())
}

/// Apply the shortfall policy to every table
///
/// **Private** - warns or fails for tables with too few qualifying stations
fn check_shortfall(tables: &[RankedTable], policy: ShortfallPolicy) -> Result<(), ReportError> {
    for table in tables {
        if let Ranking::Insufficient {
            required,
            available,
            ..
        } = &table.ranking
        {
            match policy {
                ShortfallPolicy::Truncate => {
                    warn!(
                        "Table '{}' has only {} of {} rows",
                        table.kind.title(),
                        available,
                        required
                    );
                }
                ShortfallPolicy::Fail => {
                    return Err(ReportError::InsufficientEntries {
                        table: table.kind.title().to_string(),
                        required: *required,
                        available: *available,
                    });
                }
            }
        }
    }

    Ok(())
}
