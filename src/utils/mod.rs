//! Utility modules for configuration and error handling.

pub mod error;
pub mod config;

// Re-export commonly used types for convenience
pub use error::{ConfigError, ParseError, ReportError};
pub use config::{load_config, FullNilExclusion, Palette, ReportConfig, ShortfallPolicy};
