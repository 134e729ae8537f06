mod common;

use common::{contacts_with, qso_line};
use rnil_report::aggregator::{build_tables, filter_stations, Pipeline, StationTally, TableKind};
use rnil_report::parser::{parse_line, records};
use rnil_report::utils::config::ReportConfig;

fn tally_of(lines: &[String]) -> StationTally {
    let input = lines.join("\n");
    StationTally::from_records(records(input.as_bytes())).unwrap()
}

#[test]
fn test_invariants_hold_for_mixed_log() {
    let mut lines = Vec::new();
    for i in 0..200 {
        let (call, zone) = if i % 3 == 0 { ("K1ABC", "05") } else { ("JA1ABC", "25") };
        let (cp, cp_zone) = match i % 4 {
            0 => ("W9XYZ", "04"),
            1 => ("N6AA", "03"),
            2 => ("DL1ABC", "14"),
            _ => ("KH6ZZ", "31"),
        };
        lines.push(qso_line(call, zone, cp, cp_zone, "-", i % 7 == 0));
    }

    let tally = tally_of(&lines);

    assert_eq!(tally.contact_count(), 200);
    for (_, stats) in tally.iter() {
        assert!(stats.total_nils <= stats.total_contacts);
        assert!(stats.total_w_nils <= stats.total_w_contacts);
        assert!(stats.total_w_contacts <= stats.total_contacts);
    }
    assert_eq!(tally.get("DL1ABC").unwrap().total_w_contacts, 0);
    assert_eq!(tally.get("KH6ZZ").unwrap().total_w_contacts, 0);
    assert!(tally.get("W9XYZ").unwrap().total_w_contacts > 0);
}

#[test]
fn test_corrected_call_gets_credit() {
    let lines = vec![
        qso_line("K1ABC", "05", "K8DE", "04", "K8DD", true),
        qso_line("K1ABC", "05", "K8DE", "04", "K8DD", false),
    ];

    let tally = tally_of(&lines);
    let stats = tally.get("K8DD").unwrap();

    assert!(tally.get("K8DE").is_none());
    assert_eq!(stats.total_contacts, 2);
    assert_eq!(stats.total_nils, 1);
    assert_eq!(stats.total_w_contacts, 2);
    assert_eq!(stats.total_w_nils, 1);
}

#[test]
fn test_w_counters_need_w_on_both_ends() {
    let lines = vec![
        qso_line("K1ABC", "05", "W9XYZ", "04", "-", true),
        qso_line("K1ABC", "14", "W9XYZ", "04", "-", true),
        qso_line("JA1ABC", "04", "W9XYZ", "04", "-", true),
    ];

    let stats = *tally_of(&lines).get("W9XYZ").unwrap();

    assert_eq!(stats.total_contacts, 3);
    assert_eq!(stats.total_nils, 3);
    assert_eq!(stats.total_w_contacts, 1);
    assert_eq!(stats.total_w_nils, 1);
}

#[test]
fn test_full_nil_station_excluded_regardless_of_volume() {
    let mut lines = contacts_with("DL1ABC", "14", 400, 400);
    lines.extend(contacts_with("F5ABC", "14", 249, 0));
    lines.extend(contacts_with("G4ABC", "14", 250, 0));

    let tally = tally_of(&lines);
    let rows = filter_stations(&tally, Pipeline::Overall, &ReportConfig::default());
    let calls: Vec<&str> = rows.iter().map(|r| r.callsign.as_str()).collect();

    assert_eq!(calls, vec!["G4ABC"]);
}

#[test]
fn test_table_order_is_reproducible() {
    let mut lines = Vec::new();
    for call in ["W0TIE", "K0TIE", "N0TIE", "A0TIE", "DL0TIE", "JA0TIE"] {
        lines.extend(contacts_with(call, "14", 250, 25));
    }

    let config = ReportConfig::default().with_rows_per_table(6);
    let first = build_tables(&tally_of(&lines), &config);
    let second = build_tables(&tally_of(&lines), &config);

    assert_eq!(first, second);

    let most = first.iter().find(|t| t.kind == TableKind::MostNils).unwrap();
    let calls: Vec<&str> = most
        .ranking
        .rows()
        .iter()
        .map(|r| r.callsign.as_str())
        .collect();

    assert_eq!(calls, vec!["A0TIE", "DL0TIE", "JA0TIE", "K0TIE", "N0TIE", "W0TIE"]);
}

#[test]
fn test_parse_line_matches_records() {
    let line = qso_line("AA1CA", "05", "FP/K8DD", "05", "-", false);
    let record = parse_line(1, &line).unwrap();

    assert_eq!(record.call, "AA1CA");
    assert_eq!(record.counterparty, "FP/K8DD");
    assert!(record.flags.two_way);
    assert!(!record.is_nil());
}
