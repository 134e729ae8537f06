//! HTML table fragments for ranked rNIL tables.
//!
//! The fragments are meant to be pasted into a larger page, so no document
//! skeleton is emitted: just a styled table followed by two line breaks.

use crate::aggregator::{RankedTable, StationRow, TableKind};

/// Column headers for a table
///
/// **Public** - exposed for tests and alternative renderers
pub fn headers(kind: TableKind) -> &'static [&'static str] {
    match kind {
        TableKind::MostNils => &["Callsign", "Total rQSOs", "Total rNILs"],
        TableKind::HighestNilRate => &["Callsign", "Total rQSOs", "Total rNILs", "% rNILs"],
        TableKind::MostNilsVsW => &["Callsign", "Total rQSOs with Ws", "rNILs against Ws"],
        TableKind::HighestNilRateVsW => &[
            "Callsign",
            "Total rQSOs with Ws",
            "Total rNILs against Ws",
            "% rNILs against Ws",
        ],
    }
}

/// Cell values for one row, matching `headers(kind)`
pub fn cells(kind: TableKind, row: &StationRow) -> Vec<String> {
    let stats = &row.stats;
    let mut cells = vec![html_escape(&row.callsign)];

    match kind {
        TableKind::MostNils => {
            cells.push(stats.total_contacts.to_string());
            cells.push(stats.total_nils.to_string());
        }
        TableKind::HighestNilRate => {
            cells.push(stats.total_contacts.to_string());
            cells.push(stats.total_nils.to_string());
            cells.push(format_percentage(row.nil_percentage()));
        }
        TableKind::MostNilsVsW => {
            cells.push(stats.total_w_contacts.to_string());
            cells.push(stats.total_w_nils.to_string());
        }
        TableKind::HighestNilRateVsW => {
            cells.push(stats.total_w_contacts.to_string());
            cells.push(stats.total_w_nils.to_string());
            cells.push(format_percentage(row.w_nil_percentage()));
        }
    }

    cells
}

/// One decimal place in a five-character field
pub fn format_percentage(value: f64) -> String {
    format!("{:5.1}", value)
}

/// Render one table fragment
///
/// **Public** - main entry point for a single table
pub fn render_table(table: &RankedTable, colour: &str) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        r#"<table align="center" border="2" cellpadding="3" cellspacing="3" style="background-color: {}; font-family: &quot;courier new&quot; , &quot;courier&quot; , monospace; text-align: center; width: 100%;">"#,
        html_escape(colour)
    ));
    html.push('\n');
    html.push_str("<tbody>\n");

    html.push_str("<tr>\n");
    for header in headers(table.kind) {
        html.push_str(&format!("<th>{}</th>\n", header));
    }
    html.push_str("</tr>\n");

    for row in table.ranking.rows() {
        html.push_str("<tr>\n");
        for cell in cells(table.kind, row) {
            html.push_str(&format!("<td> {} </td>\n", cell));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n");
    html.push_str("</table>\n");
    html.push_str("<br/>\n<br/>\n");

    html
}

/// Render all tables, in order, as one string
pub fn render_report(tables: &[RankedTable], colour: &str) -> String {
    tables
        .iter()
        .map(|table| render_table(table, colour))
        .collect()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
