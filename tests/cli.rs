mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use common::{contacts_with, write_log};
use predicates::prelude::*;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("count-rnils");
    cmd.env_remove("RNIL_REPORT_CONFIG").env("RUST_LOG", "warn");
    cmd
}

#[test]
fn prints_four_tables() {
    let log = write_log(&contacts_with("DL1ABC", "14", 300, 30));

    cmd()
        .arg(log.path())
        .assert()
        .success()
        .stdout(contains("<td> DL1ABC </td>"))
        .stdout(contains("background-color: #99ffff;"))
        .stdout(contains("<table").count(4));
}

#[test]
fn legacy_green_switch() {
    let log = write_log(&contacts_with("DL1ABC", "14", 300, 30));

    cmd()
        .arg(log.path())
        .arg("-green")
        .assert()
        .success()
        .stdout(contains("background-color: #99ff99;"));
}

#[test]
fn missing_file_fails_without_output() {
    cmd()
        .arg("/nonexistent/contest.log")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("Failed to open log"));
}

#[test]
fn strict_mode_rejects_short_tables() {
    let log = write_log(&contacts_with("DL1ABC", "14", 300, 30));

    cmd()
        .arg(log.path())
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("only 1 of 10"));
}

#[test]
fn config_file_overrides_defaults() {
    let log = write_log(&contacts_with("DL1ABC", "14", 60, 6));
    let mut config = NamedTempFile::new().unwrap();
    write!(
        config,
        r##"{{"min_contacts_overall": 50, "palette": {{"default": "#ffffff"}}}}"##
    )
    .unwrap();
    config.flush().unwrap();

    cmd()
        .arg(log.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(contains("background-color: #ffffff;"))
        .stdout(contains("<td> DL1ABC </td>\n<td> 60 </td>\n<td> 6 </td>"));
}

#[test]
fn other_second_argument_keeps_default_colour() {
    let log = write_log(&contacts_with("DL1ABC", "14", 300, 30));

    for value in ["-blue", "cw"] {
        cmd()
            .arg(log.path())
            .arg(value)
            .assert()
            .success()
            .stdout(contains("background-color: #99ffff;"))
            .stdout(contains("#99ff99").not())
            .stdout(contains("<table").count(4));
    }
}

#[test]
fn logs_qualifying_counts_at_info() {
    let log = write_log(&contacts_with("DL1ABC", "14", 300, 30));

    cmd()
        .env("RUST_LOG", "info")
        .arg(log.path())
        .assert()
        .success()
        .stderr(contains("Overall pipeline: 1 qualifying stations"))
        .stderr(contains("VersusW pipeline: 0 qualifying stations"));
}
