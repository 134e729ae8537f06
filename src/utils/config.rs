//! Configuration and constants for the report pipeline.

use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of ranked rows in each table
pub const DEFAULT_ROWS_PER_TABLE: usize = 10;

// 50 is about right for a single year, 250 for ten years of logs
pub const DEFAULT_MIN_CONTACTS_OVERALL: u64 = 250;
pub const DEFAULT_MIN_CONTACTS_VS_W: u64 = DEFAULT_MIN_CONTACTS_OVERALL / 2;

// Table background colours (green is traditionally used for CW)
pub const DEFAULT_COLOUR: &str = "#99ffff";
pub const GREEN_COLOUR: &str = "#99ff99";

/// Background colours the report can be rendered with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Colour used unless the alternate palette is requested
    pub default: String,

    /// The "green" variant
    pub alt: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default: DEFAULT_COLOUR.to_string(),
            alt: GREEN_COLOUR.to_string(),
        }
    }
}

impl Palette {
    pub fn colour(&self, use_alt: bool) -> &str {
        if use_alt {
            &self.alt
        } else {
            &self.default
        }
    }
}

/// Which ratio decides the "100% rNILs" exclusion in the versus-W tables.
///
/// Stations with a 100% rNIL rate usually point at a broken log rather than
/// an operator problem, so they are dropped. The versus-W tables have always
/// tested the *overall* ratio; `VersusW` tests the W-only ratio instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullNilExclusion {
    #[default]
    Overall,
    VersusW,
}

/// What to do when fewer stations qualify than there are rows to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortfallPolicy {
    /// Render the stations that did qualify and log a warning
    #[default]
    Truncate,

    /// Abort the run before anything is printed
    Fail,
}

/// Everything that shapes the four tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub rows_per_table: usize,
    pub min_contacts_overall: u64,
    pub min_contacts_vs_w: u64,
    pub palette: Palette,
    pub full_nil_exclusion: FullNilExclusion,
    pub shortfall: ShortfallPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            rows_per_table: DEFAULT_ROWS_PER_TABLE,
            min_contacts_overall: DEFAULT_MIN_CONTACTS_OVERALL,
            min_contacts_vs_w: DEFAULT_MIN_CONTACTS_VS_W,
            palette: Palette::default(),
            full_nil_exclusion: FullNilExclusion::default(),
            shortfall: ShortfallPolicy::default(),
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows_per_table(mut self, rows: usize) -> Self {
        self.rows_per_table = rows;
        self
    }

    /// Set the overall threshold; the versus-W threshold follows at half,
    /// rounded up so an odd threshold never loosens the W filter
    pub fn with_min_contacts(mut self, min_contacts: u64) -> Self {
        self.min_contacts_overall = min_contacts;
        self.min_contacts_vs_w = min_contacts.div_ceil(2);
        self
    }

    pub fn with_shortfall(mut self, shortfall: ShortfallPolicy) -> Self {
        self.shortfall = shortfall;
        self
    }

    pub fn with_full_nil_exclusion(mut self, exclusion: FullNilExclusion) -> Self {
        self.full_nil_exclusion = exclusion;
        self
    }

    /// Reject settings that would make a table meaningless.
    ///
    /// Zero thresholds are refused because the percentage columns divide by
    /// the contact counts the thresholds guarantee to be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows_per_table == 0 {
            return Err(ConfigError::Invalid(
                "rows_per_table must be greater than 0".to_string(),
            ));
        }

        if self.min_contacts_overall == 0 {
            return Err(ConfigError::Invalid(
                "min_contacts_overall must be greater than 0".to_string(),
            ));
        }

        if self.min_contacts_vs_w == 0 {
            return Err(ConfigError::Invalid(
                "min_contacts_vs_w must be greater than 0".to_string(),
            ));
        }

        if self.palette.default.trim().is_empty() || self.palette.alt.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "palette colours cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load a report configuration from a JSON file.
///
/// Fields missing from the file keep their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<ReportConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading report config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: ReportConfig = serde_json::from_str(&content)?;
    config.validate()?;

    Ok(config)
}
