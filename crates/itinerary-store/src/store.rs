//! The itinerary store

use crate::error::StoreError;
use chrono::NaiveDate;
use itinerary_gateway::ItineraryGateway;
use itinerary_model::{ActivityEntry, ItineraryDocument, TripId};

/// Canonical in-memory state for one trip's itinerary
///
/// Holds the current document and the selected date. All mutation flows
/// through [`ItineraryStore::replace_date_entries`]; editor surfaces never
/// touch the held document directly, they submit a fully-formed replacement
/// sequence built with [`itinerary_model::sequence`].
#[derive(Debug)]
pub struct ItineraryStore<G> {
    gateway: G,
    document: Option<ItineraryDocument>,
    selected_date: Option<NaiveDate>,
}

impl<G: ItineraryGateway> ItineraryStore<G> {
    /// Create a store over a gateway, with no document loaded
    #[inline]
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            document: None,
            selected_date: None,
        }
    }

    /// Load the itinerary for a trip, replacing the held document
    ///
    /// On failure the prior state is left untouched.
    ///
    /// # Errors
    /// [`StoreError::LoadFailed`] wrapping the gateway error.
    pub async fn load(&mut self, trip: &TripId) -> Result<&ItineraryDocument, StoreError> {
        tracing::debug!(%trip, "loading itinerary");

        match self.gateway.fetch_by_trip(trip).await {
            Ok(doc) => {
                tracing::info!(%trip, id = %doc.id, entries = doc.entry_count(), "itinerary loaded");
                Ok(&*self.document.insert(doc))
            }
            Err(e) => {
                tracing::warn!(%trip, error = %e, "itinerary load failed");
                Err(StoreError::LoadFailed(e))
            }
        }
    }

    /// Select the date editors operate on
    ///
    /// Pure state change. Dates absent from the document are accepted;
    /// readers treat them as an empty sequence.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    /// Replace one date's sequence and persist the whole document
    ///
    /// Constructs a copy of the held document with `entries_by_date[date]`
    /// swapped for `new_entries`, sends it through the gateway, and adopts
    /// the returned document as the new state. The store therefore never
    /// diverges from the backend's accepted version.
    ///
    /// On save failure the held state is NOT rolled back; callers may retry
    /// with the same sequence (the overwrite is idempotent).
    ///
    /// # Errors
    /// [`StoreError::NoDocument`] before any successful load;
    /// [`StoreError::SaveFailed`] wrapping the gateway error.
    pub async fn replace_date_entries(
        &mut self,
        date: NaiveDate,
        new_entries: Vec<ActivityEntry>,
    ) -> Result<&ItineraryDocument, StoreError> {
        let current = self.document.as_ref().ok_or(StoreError::NoDocument)?;
        let candidate = current.with_date_entries(date, new_entries);

        tracing::debug!(
            id = %candidate.id,
            %date,
            entries = candidate.entries_for(date).len(),
            "persisting replacement sequence"
        );

        match self.gateway.persist(&candidate).await {
            Ok(stored) => {
                tracing::info!(id = %stored.id, %date, "replacement persisted");
                Ok(&*self.document.insert(stored))
            }
            Err(e) => {
                tracing::warn!(id = %candidate.id, %date, error = %e, "save failed");
                Err(StoreError::SaveFailed(e))
            }
        }
    }

    /// The held document, if one has been loaded
    #[inline]
    #[must_use]
    pub fn document(&self) -> Option<&ItineraryDocument> {
        self.document.as_ref()
    }

    /// The currently selected date
    #[inline]
    #[must_use]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Entries for the selected date; empty when nothing is selected or
    /// loaded, or the date has no entries
    #[must_use]
    pub fn current_entries(&self) -> &[ActivityEntry] {
        match (&self.document, self.selected_date) {
            (Some(doc), Some(date)) => doc.entries_for(date),
            _ => &[],
        }
    }

    /// The underlying gateway
    #[inline]
    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinerary_gateway::{GatewayError, InMemoryGateway};
    use itinerary_model::{sequence, ActivityKind, EntryDetails, ItineraryId, NoteFields};
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn seeded_store() -> ItineraryStore<InMemoryGateway> {
        let gateway = InMemoryGateway::new();
        gateway.seed(ItineraryDocument::new(
            ItineraryId::new("itin-1"),
            TripId::new("trip-1"),
        ));
        ItineraryStore::new(gateway)
    }

    fn note(title: &str) -> EntryDetails {
        EntryDetails::new(title, ActivityKind::Note(NoteFields::default()))
    }

    #[tokio::test]
    async fn load_replaces_held_document() {
        let mut store = seeded_store();
        let doc = store.load(&TripId::new("trip-1")).await.unwrap();
        assert_eq!(doc.id, ItineraryId::new("itin-1"));
        assert!(store.document().is_some());
    }

    #[tokio::test]
    async fn load_failure_keeps_prior_state() {
        let mut store = seeded_store();
        store.load(&TripId::new("trip-1")).await.unwrap();

        store.gateway().set_fail_fetch(true);
        let err = store.load(&TripId::new("trip-1")).await.unwrap_err();
        assert!(matches!(err, StoreError::LoadFailed(_)));

        // Prior document survives the failed reload
        assert_eq!(store.document().unwrap().id, ItineraryId::new("itin-1"));
    }

    #[tokio::test]
    async fn load_missing_trip_reports_not_found() {
        let mut store = seeded_store();
        let err = store.load(&TripId::new("elsewhere")).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::LoadFailed(GatewayError::NotFound(_))
        ));
        assert!(store.document().is_none());
    }

    #[tokio::test]
    async fn replace_without_load_is_rejected() {
        let mut store = seeded_store();
        let err = store
            .replace_date_entries(date("2025-06-01"), vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NoDocument));
    }

    #[tokio::test]
    async fn replace_adopts_gateway_response() {
        let mut store = seeded_store();
        store.load(&TripId::new("trip-1")).await.unwrap();

        let d = date("2025-06-01");
        let next = sequence::append(store.document().unwrap().entries_for(d), d, note("Packing"));
        let stored = store.replace_date_entries(d, next).await.unwrap();

        assert_eq!(stored.entries_for(d).len(), 1);
        assert_eq!(stored.entries_for(d)[0].position, 1);
        // Held state equals what the gateway accepted
        assert_eq!(
            store.document().unwrap(),
            &store.gateway().stored(&TripId::new("trip-1")).unwrap()
        );
    }

    #[tokio::test]
    async fn save_failure_does_not_roll_back_and_retry_succeeds() {
        let mut store = seeded_store();
        store.load(&TripId::new("trip-1")).await.unwrap();

        let d = date("2025-06-01");
        let next = sequence::append(&[], d, note("Packing"));

        store.gateway().set_fail_persist(true);
        let err = store
            .replace_date_entries(d, next.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::SaveFailed(_)));
        assert!(err.is_retryable());

        // Held document unchanged, backend unchanged
        assert!(store.document().unwrap().entries_for(d).is_empty());

        // User-initiated retry with the identical sequence
        store.gateway().set_fail_persist(false);
        let stored = store.replace_date_entries(d, next).await.unwrap();
        assert_eq!(stored.entries_for(d).len(), 1);
    }

    #[tokio::test]
    async fn selection_and_current_entries() {
        let mut store = seeded_store();
        assert!(store.current_entries().is_empty());

        store.load(&TripId::new("trip-1")).await.unwrap();
        let d = date("2025-06-01");

        // Absent key is accepted and reads as empty
        store.select_date(d);
        assert_eq!(store.selected_date(), Some(d));
        assert!(store.current_entries().is_empty());

        let next = sequence::append(&[], d, note("Packing"));
        store.replace_date_entries(d, next).await.unwrap();
        assert_eq!(store.current_entries().len(), 1);
    }
}
