//! The per-trip itinerary document

use crate::entry::ActivityEntry;
use crate::error::ModelError;
use crate::sequence;
use crate::types::{ItineraryId, TripId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full itinerary of one trip: each date maps to its ordered entries
///
/// Mutated exclusively by whole-document replacement through the gateway;
/// within this crate the document is a plain value. Date iteration order is
/// sorted (the map is a `BTreeMap`); order *within* a date is the display
/// order and is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDocument {
    /// Gateway-assigned document identifier
    pub id: ItineraryId,
    /// Owning trip, stable for the document's lifetime
    pub trip_id: TripId,
    /// Ordered entry sequence per calendar date
    pub entries_by_date: BTreeMap<NaiveDate, Vec<ActivityEntry>>,
}

impl ItineraryDocument {
    /// Create a document with no entries
    #[inline]
    #[must_use]
    pub fn new(id: ItineraryId, trip_id: TripId) -> Self {
        Self {
            id,
            trip_id,
            entries_by_date: BTreeMap::new(),
        }
    }

    /// Entries for one date; absent dates read as an empty sequence
    #[inline]
    #[must_use]
    pub fn entries_for(&self, date: NaiveDate) -> &[ActivityEntry] {
        self.entries_by_date
            .get(&date)
            .map_or(&[], Vec::as_slice)
    }

    /// A copy of this document with one date's sequence replaced
    ///
    /// This is the read-modify-write step of the update protocol: everything
    /// except `entries_by_date[date]` is carried over unchanged.
    #[must_use]
    pub fn with_date_entries(&self, date: NaiveDate, entries: Vec<ActivityEntry>) -> Self {
        let mut next = self.clone();
        next.entries_by_date.insert(date, entries);
        next
    }

    /// Total entry count across all dates
    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries_by_date.values().map(Vec::len).sum()
    }

    /// Check position and date invariants for every date
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (date, entries) in &self.entries_by_date {
            sequence::validate(*date, entries)?;
        }
        Ok(())
    }
}
