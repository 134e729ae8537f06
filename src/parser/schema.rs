//! Named-field view of one augmented log line.
//!
//! Augmented logs carry a fixed column layout, e.g.
//!
//! ```text
//! QSO:  7045 CW 2005-11-27 1154 AA1CA   599 05  FP/K8DD  599 05  AQS1 2154  40 TFFFFFTTFFFFF- - - - -
//! ```
//!
//! Only a handful of those columns matter for rNIL statistics; the rest are
//! carried through the line grammar unchecked.

/// Column holding the first-party (logging) callsign
pub const FIELD_CALL: usize = 5;
/// Column holding the first-party CQ zone
pub const FIELD_CALL_ZONE: usize = 7;
/// Column holding the counterparty callsign as logged
pub const FIELD_LOGGED_CALL: usize = 8;
/// Column holding the counterparty CQ zone
pub const FIELD_COUNTERPARTY_ZONE: usize = 10;
/// Column holding the cross-check flag string
pub const FIELD_FLAGS: usize = 14;
/// Column holding the bust-corrected counterparty callsign, or `-`
pub const FIELD_CORRECTED_CALL: usize = 16;

/// Minimum number of whitespace-separated fields in a record
pub const MIN_FIELDS: usize = FIELD_CORRECTED_CALL + 1;

/// Placeholder used in the corrected-call column when no bust was found
pub const NO_CORRECTION: &str = "-";

// Offsets into the flag string
pub const FLAG_TWO_WAY: usize = 0;
pub const FLAG_REVERSE_BUST: usize = 1;
pub const FLAG_BUST: usize = 2;
pub const FLAG_NIL: usize = 4;

/// Callsign prefixes that look like a USA station
const W_PREFIXES: &[char] = &['A', 'K', 'N', 'W'];

/// CQ zones of the continental USA
const W_ZONES: &[&str] = &["03", "04", "05"];

/// Cross-check results recorded for a single contact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QsoFlags {
    /// Both stations logged the contact
    pub two_way: bool,

    /// The counterparty busted our call
    pub reverse_bust: bool,

    /// We busted the counterparty's call
    pub bust: bool,

    /// Not in the counterparty's log
    pub nil: bool,
}

/// One classified contact, as seen from the first party
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub call: String,
    pub call_zone: String,

    /// Counterparty after bust correction
    pub counterparty: String,
    pub counterparty_zone: String,

    pub flags: QsoFlags,
}

impl ContactRecord {
    pub fn call_is_w(&self) -> bool {
        is_w(&self.call, &self.call_zone)
    }

    pub fn counterparty_is_w(&self) -> bool {
        is_w(&self.counterparty, &self.counterparty_zone)
    }

    /// Both ends of the contact are W stations
    pub fn is_w_to_w(&self) -> bool {
        self.call_is_w() && self.counterparty_is_w()
    }

    pub fn is_nil(&self) -> bool {
        self.flags.nil
    }
}

/// Heuristic test for a continental-USA station.
///
/// True when the callsign starts with A, K, N or W and the zone is 03, 04
/// or 05. This is not a prefix database lookup; portable and DX-located
/// operations will be misclassified.
pub fn is_w(call: &str, zone: &str) -> bool {
    let looks_w = call.chars().next().is_some_and(|c| W_PREFIXES.contains(&c));
    looks_w && W_ZONES.contains(&zone)
}
