//! Booking lookup by confirmation code or id.

use crate::error::CommerceError;
use crate::tracking::record::BookingRecord;

/// Resolve a user-supplied identifier against a booking record set.
///
/// The match is case-insensitive exact on the confirmation code, or exact on
/// the internal id; the first matching record wins, preserving input order.
/// `Ok(None)` is the expected no-match outcome, distinct from the
/// `EmptyQuery` error for a blank query.
pub fn track<'a>(
    query: &str,
    records: &'a [BookingRecord],
) -> Result<Option<&'a BookingRecord>, CommerceError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CommerceError::EmptyQuery);
    }

    Ok(records.iter().find(|record| {
        record.confirmation_code.eq_ignore_ascii_case(query) || record.id.as_str() == query
    }))
}

/// A tracker owning its record set, for hosts that hold the records.
#[derive(Debug, Clone, Default)]
pub struct BookingTracker {
    records: Vec<BookingRecord>,
}

impl BookingTracker {
    /// Create a tracker over a record set.
    pub fn new(records: Vec<BookingRecord>) -> Self {
        Self { records }
    }

    /// Look up a booking. See [`track`].
    pub fn track(&self, query: &str) -> Result<Option<&BookingRecord>, CommerceError> {
        track(query, &self.records)
    }

    /// The records this tracker searches.
    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }
}
