//! Filter station aggregates and rank them for the four report tables.
//!
//! Two pipelines feed the tables:
//! - Overall: stations with enough rQSOs in total
//! - Versus W: stations with enough rQSOs from W stations
//!
//! Each pipeline is ranked twice, once by absolute rNIL count and once by
//! rNIL percentage. Ties always fall back to callsign order so the output is
//! identical between runs.

use super::tally::{StationAggregate, StationTally};
use crate::utils::config::{FullNilExclusion, ReportConfig};
use log::info;
use std::cmp::Ordering;

/// A station that survived a pipeline filter
///
/// **Public** - row data for the HTML tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRow {
    pub callsign: String,
    pub stats: StationAggregate,
}

impl StationRow {
    pub fn new(callsign: impl Into<String>, stats: StationAggregate) -> Self {
        Self {
            callsign: callsign.into(),
            stats,
        }
    }

    /// rNILs as a percentage of all rQSOs
    pub fn nil_percentage(&self) -> f64 {
        percentage(self.stats.total_nils, self.stats.total_contacts)
    }

    /// rNILs against Ws as a percentage of rQSOs with Ws
    pub fn w_nil_percentage(&self) -> f64 {
        percentage(self.stats.total_w_nils, self.stats.total_w_contacts)
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

/// Which filter a table draws its stations from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    Overall,
    VersusW,
}

impl Pipeline {
    /// Decide whether a station takes part in this pipeline.
    ///
    /// Stations with 100% rNILs are left out of both pipelines; a log in
    /// that state is almost always broken rather than badly copied.
    pub fn qualifies(&self, stats: &StationAggregate, config: &ReportConfig) -> bool {
        match self {
            Pipeline::Overall => {
                stats.total_contacts >= config.min_contacts_overall && !stats.all_nil()
            }
            Pipeline::VersusW => {
                let excluded = match config.full_nil_exclusion {
                    FullNilExclusion::Overall => stats.all_nil(),
                    FullNilExclusion::VersusW => stats.all_w_nil(),
                };
                stats.total_w_contacts >= config.min_contacts_vs_w && !excluded
            }
        }
    }
}

/// Collect the stations that qualify for a pipeline, in callsign order
///
/// **Public** - shared by both tables of a pipeline
pub fn filter_stations(
    tally: &StationTally,
    pipeline: Pipeline,
    config: &ReportConfig,
) -> Vec<StationRow> {
    let mut rows: Vec<StationRow> = tally
        .iter()
        .filter(|(_, stats)| pipeline.qualifies(stats, config))
        .map(|(call, stats)| StationRow::new(call, *stats))
        .collect();

    rows.sort_by(|a, b| a.callsign.cmp(&b.callsign));

    info!("{:?} pipeline: {} qualifying stations", pipeline, rows.len());
    rows
}

/// The four report tables, in print order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    MostNils,
    HighestNilRate,
    MostNilsVsW,
    HighestNilRateVsW,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::MostNils,
        TableKind::HighestNilRate,
        TableKind::MostNilsVsW,
        TableKind::HighestNilRateVsW,
    ];

    pub fn pipeline(&self) -> Pipeline {
        match self {
            TableKind::MostNils | TableKind::HighestNilRate => Pipeline::Overall,
            TableKind::MostNilsVsW | TableKind::HighestNilRateVsW => Pipeline::VersusW,
        }
    }

    /// Short human-readable name, used in logs and errors
    pub fn title(&self) -> &'static str {
        match self {
            TableKind::MostNils => "most rNILs",
            TableKind::HighestNilRate => "highest rNIL percentage",
            TableKind::MostNilsVsW => "most rNILs against Ws",
            TableKind::HighestNilRateVsW => "highest rNIL percentage against Ws",
        }
    }

    /// Ranking order: key descending, then callsign ascending
    pub fn compare(&self, a: &StationRow, b: &StationRow) -> Ordering {
        let (sa, sb) = (&a.stats, &b.stats);

        let by_key = match self {
            TableKind::MostNils => sb.total_nils.cmp(&sa.total_nils),
            TableKind::HighestNilRate => compare_ratio(
                (sb.total_nils, sb.total_contacts),
                (sa.total_nils, sa.total_contacts),
            ),
            TableKind::MostNilsVsW => sb.total_w_nils.cmp(&sa.total_w_nils),
            TableKind::HighestNilRateVsW => compare_ratio(
                (sb.total_w_nils, sb.total_w_contacts),
                (sa.total_w_nils, sa.total_w_contacts),
            ),
        };

        by_key.then_with(|| a.callsign.cmp(&b.callsign))
    }
}

/// Compare two fractions exactly by cross-multiplying
fn compare_ratio((num_a, den_a): (u64, u64), (num_b, den_b): (u64, u64)) -> Ordering {
    (num_a as u128 * den_b as u128).cmp(&(num_b as u128 * den_a as u128))
}

/// Outcome of a top-N selection
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// Exactly the requested number of rows
    Ranked(Vec<StationRow>),

    /// Fewer stations qualified than rows were requested
    Insufficient {
        required: usize,
        available: usize,
        rows: Vec<StationRow>,
    },
}

impl Ranking {
    pub fn rows(&self) -> &[StationRow] {
        match self {
            Ranking::Ranked(rows) => rows,
            Ranking::Insufficient { rows, .. } => rows,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Ranking::Ranked(_))
    }
}

/// Rank stations for one table and keep the top `top_n`
///
/// **Public** - main entry point for ranking
pub fn rank(stations: &[StationRow], kind: TableKind, top_n: usize) -> Ranking {
    let mut rows = stations.to_vec();
    rows.sort_by(|a, b| kind.compare(a, b));

    if rows.len() < top_n {
        return Ranking::Insufficient {
            required: top_n,
            available: rows.len(),
            rows,
        };
    }

    rows.truncate(top_n);
    Ranking::Ranked(rows)
}

/// One ranked table, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTable {
    pub kind: TableKind,
    pub ranking: Ranking,
}

/// Build all four tables from a finished tally
///
/// **Public** - used by the report command
pub fn build_tables(tally: &StationTally, config: &ReportConfig) -> Vec<RankedTable> {
    let overall = filter_stations(tally, Pipeline::Overall, config);
    let versus_w = filter_stations(tally, Pipeline::VersusW, config);

    TableKind::ALL
        .iter()
        .map(|&kind| {
            let stations = match kind.pipeline() {
                Pipeline::Overall => &overall,
                Pipeline::VersusW => &versus_w,
            };

            RankedTable {
                kind,
                ranking: rank(stations, kind, config.rows_per_table),
            }
        })
        .collect()
}
