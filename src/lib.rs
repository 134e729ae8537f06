//! rNIL Report
//!
//! Reads an augmented contest log and ranks the stations whose logs most
//! often miss contacts claimed with them ("rNILs").
//!
//! The pipeline is a single pass over the log:
//! - [`parser`] turns each line into a classified contact
//! - [`aggregator`] tallies contacts per counterparty and ranks them
//! - [`output`] renders the ranked tables as HTML fragments
//!
//! ## Getting Started
//!
//! ```bash
//! count-rnils contest.augmented --green > rnils.html
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
