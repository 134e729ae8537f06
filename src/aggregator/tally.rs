//! Per-station rQSO and rNIL counters.
//!
//! Every contact is credited to its (bust-corrected) counterparty: from that
//! station's point of view it is an rQSO, and an rNIL when the contact is
//! missing from its log.

use crate::parser::ContactRecord;
use crate::utils::error::ParseError;
use log::debug;
use std::collections::HashMap;

/// Counters for one counterparty callsign
///
/// **Public** - read by the ranking stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StationAggregate {
    /// Contacts where this station was the counterparty
    pub total_contacts: u64,

    /// Of those, how many are not in this station's log
    pub total_nils: u64,

    /// Contacts where both ends are W stations
    pub total_w_contacts: u64,

    /// W-to-W contacts not in this station's log
    pub total_w_nils: u64,
}

impl StationAggregate {
    /// Fold one contact into the counters
    pub fn record(&mut self, contact: &ContactRecord) {
        self.total_contacts += 1;

        if contact.is_nil() {
            self.total_nils += 1;
        }

        if contact.is_w_to_w() {
            self.total_w_contacts += 1;

            if contact.is_nil() {
                self.total_w_nils += 1;
            }
        }
    }

    /// Every contact with this station is an rNIL
    pub fn all_nil(&self) -> bool {
        self.total_nils == self.total_contacts
    }

    /// Every W-to-W contact with this station is an rNIL
    pub fn all_w_nil(&self) -> bool {
        self.total_w_nils == self.total_w_contacts
    }
}

/// All station aggregates for one log
///
/// **Public** - built by the report command, then handed to ranking
#[derive(Debug, Clone, Default)]
pub struct StationTally {
    stations: HashMap<String, StationAggregate>,
    contacts: u64,
}

impl StationTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a stream of parsed records, stopping at the first parse error
    ///
    /// **Public** - main entry point for aggregation
    pub fn from_records<I>(records: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = Result<ContactRecord, ParseError>>,
    {
        let mut tally = Self::new();

        for record in records {
            tally.add(&record?);
        }

        debug!(
            "Tallied {} contacts across {} stations",
            tally.contacts,
            tally.stations.len()
        );

        Ok(tally)
    }

    /// Credit one contact to its counterparty
    pub fn add(&mut self, contact: &ContactRecord) {
        self.contacts += 1;
        self.stations
            .entry(contact.counterparty.clone())
            .or_default()
            .record(contact);
    }

    pub fn get(&self, callsign: &str) -> Option<&StationAggregate> {
        self.stations.get(callsign)
    }

    /// Number of contacts folded in
    pub fn contact_count(&self) -> u64 {
        self.contacts
    }

    /// Number of distinct counterparties
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate in arbitrary order; ranking imposes its own ordering
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StationAggregate)> {
        self.stations.iter().map(|(call, stats)| (call.as_str(), stats))
    }
}
