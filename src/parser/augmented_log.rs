//! Line grammar for augmented contest logs.
//!
//! Each line is split on whitespace and mapped onto a [`ContactRecord`].
//! Any line that does not fit the grammar aborts the read with a
//! [`ParseError`] naming the line.

use super::schema::{
    ContactRecord, QsoFlags, FIELD_CALL, FIELD_CALL_ZONE, FIELD_CORRECTED_CALL,
    FIELD_COUNTERPARTY_ZONE, FIELD_FLAGS, FIELD_LOGGED_CALL, FLAG_BUST, FLAG_NIL,
    FLAG_REVERSE_BUST, FLAG_TWO_WAY, MIN_FIELDS, NO_CORRECTION,
};
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse one log line into a contact record
///
/// **Public** - main entry point for single-line parsing
///
/// # Arguments
/// * `line_number` - 1-based position of the line, used in errors
/// * `line` - Raw line text
///
/// # Errors
/// * `ParseError::TooFewFields` - fewer than 17 fields
/// * `ParseError::InvalidZone` - a zone column is not numeric
/// * `ParseError::InvalidFlags` - flag string shorter than 5 characters
pub fn parse_line(line_number: usize, line: &str) -> Result<ContactRecord, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < MIN_FIELDS {
        return Err(ParseError::TooFewFields {
            line: line_number,
            found: fields.len(),
            required: MIN_FIELDS,
        });
    }

    let call_zone = parse_zone(line_number, "first-party", fields[FIELD_CALL_ZONE])?;
    let counterparty_zone =
        parse_zone(line_number, "counterparty", fields[FIELD_COUNTERPARTY_ZONE])?;
    let flags = parse_flags(line_number, fields[FIELD_FLAGS])?;

    Ok(ContactRecord {
        call: fields[FIELD_CALL].to_string(),
        call_zone,
        counterparty: resolve_counterparty(fields[FIELD_LOGGED_CALL], fields[FIELD_CORRECTED_CALL])
            .to_string(),
        counterparty_zone,
        flags,
    })
}

/// Pick the station a contact is credited to.
///
/// A bust-corrected call wins over the call as logged.
pub fn resolve_counterparty<'a>(logged: &'a str, corrected: &'a str) -> &'a str {
    if corrected == NO_CORRECTION {
        logged
    } else {
        corrected
    }
}

/// Iterate over the records of an augmented log
///
/// **Public** - lazily parses lines so the aggregator can fold them in one pass
pub fn records<R: BufRead>(reader: R) -> impl Iterator<Item = Result<ContactRecord, ParseError>> {
    reader.lines().enumerate().map(|(index, line)| {
        let line = line?;
        parse_line(index + 1, &line)
    })
}

/// Open an augmented log file for reading
///
/// **Public** - used by the report command
pub fn open_log(path: impl AsRef<Path>) -> Result<BufReader<File>, ParseError> {
    let path = path.as_ref();
    debug!("Opening augmented log: {}", path.display());

    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Validate a zone column
///
/// **Private** - zones are kept as strings since "03" and "3" differ on the wire
fn parse_zone(line: usize, field: &'static str, value: &str) -> Result<String, ParseError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidZone {
            line,
            field,
            value: value.to_string(),
        });
    }

    Ok(value.to_string())
}

/// Decode the cross-check flag string
///
/// **Private** - a flag is set only by `T`; any other character reads as unset
fn parse_flags(line: usize, value: &str) -> Result<QsoFlags, ParseError> {
    let chars: Vec<char> = value.chars().collect();

    if chars.len() <= FLAG_NIL {
        return Err(ParseError::InvalidFlags {
            line,
            value: value.to_string(),
            reason: format!("expected at least {} characters", FLAG_NIL + 1),
        });
    }

    let flag_at = |offset: usize| chars[offset] == 'T';

    Ok(QsoFlags {
        two_way: flag_at(FLAG_TWO_WAY),
        reverse_bust: flag_at(FLAG_REVERSE_BUST),
        bust: flag_at(FLAG_BUST),
        nil: flag_at(FLAG_NIL),
    })
}
