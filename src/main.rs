//! rNIL Report CLI
//!
//! Prints four ranked HTML tables of rNIL statistics for an augmented
//! contest log.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

use rnil_report::commands::{execute_report, ReportArgs};
use rnil_report::utils::config::{load_config, ReportConfig, ShortfallPolicy};

const LEGACY_GREEN_SWITCH: &str = "-green";

/// Rank stations by rNILs in an augmented contest log
#[derive(Parser, Debug)]
#[command(name = "count-rnils")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Augmented log file
    log_file: PathBuf,

    /// Historical palette switch; only `-green` changes the colour
    #[arg(value_name = "PALETTE", allow_hyphen_values = true)]
    palette_switch: Option<String>,

    /// Use the green table colour (traditionally for CW)
    #[arg(long)]
    green: bool,

    /// JSON file overriding report settings
    #[arg(short, long, env = "RNIL_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Rows per table
    #[arg(long)]
    rows: Option<usize>,

    /// Minimum rQSOs for the overall tables (half applies to the W tables)
    #[arg(long)]
    min_qsos: Option<u64>,

    /// Fail instead of printing short tables
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = build_config(&cli)?;
    debug!("Report config: {:?}", config);

    let use_alt_palette = cli.wants_green();
    let args = ReportArgs {
        log_file: cli.log_file,
        use_alt_palette,
        config,
    };

    let stdout = std::io::stdout();
    execute_report(&args, &mut stdout.lock())?;

    Ok(())
}

/// Merge the config file (if any) with command-line overrides
///
/// **Private** - CLI flags win over the file
fn build_config(cli: &Cli) -> Result<ReportConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if let Some(rows) = cli.rows {
        config = config.with_rows_per_table(rows);
    }

    if let Some(min_qsos) = cli.min_qsos {
        config = config.with_min_contacts(min_qsos);
    }

    if cli.strict {
        config = config.with_shortfall(ShortfallPolicy::Fail);
    }

    Ok(config)
}

impl Cli {
    /// `--green`, or `-green` as the second argument; any other value is ignored
    fn wants_green(&self) -> bool {
        self.green || self.palette_switch.as_deref() == Some(LEGACY_GREEN_SWITCH)
    }
}
