//! Record timestamps.
//!
//! Timestamps are plain seconds (`f64`) on whatever epoch the source uses;
//! only their relative order matters to the toolkit.  Parsing of textual
//! datetimes belongs to the ingestion layer (`aisd-io`).

use std::cmp::Ordering;
use std::fmt;

/// Seconds since an arbitrary epoch.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub f64);

impl Timestamp {
    /// Total order over timestamps (`f64::total_cmp`), used for sorting.
    #[inline]
    pub fn total_cmp(&self, other: &Timestamp) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
