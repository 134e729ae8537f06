#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// One augmented log line with the columns the report reads filled in.
///
/// `corrected` is the bust-corrected counterparty, `-` when there is none.
pub fn qso_line(
    call: &str,
    zone: &str,
    logged: &str,
    counterparty_zone: &str,
    corrected: &str,
    nil: bool,
) -> String {
    let flags = if nil { "TFFFTFTTFFFFF-" } else { "TFFFFFTTFFFFF-" };
    format!(
        "QSO: 14025 CW 2005-11-27 1200 {} 599 {} {} 599 {} AQS1 2154 40 {} - {} - -",
        call, zone, logged, counterparty_zone, flags, corrected
    )
}

/// `count` contacts from a non-W caller with the same counterparty
pub fn contacts_with(counterparty: &str, zone: &str, count: usize, nils: usize) -> Vec<String> {
    (0..count)
        .map(|i| qso_line("G3XYZ", "14", counterparty, zone, "-", i < nils))
        .collect()
}

pub fn write_log(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp log");
    for line in lines {
        writeln!(file, "{}", line).expect("write log line");
    }
    file.flush().expect("flush log");
    file
}
