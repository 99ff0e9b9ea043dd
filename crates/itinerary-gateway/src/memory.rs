//! Map-backed gateway for tests and simulations
//!
//! Mirrors the backend's observable behavior: whole-document overwrite,
//! last-writer-wins, documents created out-of-band (via [`InMemoryGateway::seed`]).

use crate::error::GatewayError;
use crate::ItineraryGateway;
use async_trait::async_trait;
use itinerary_model::{ItineraryDocument, ItineraryId, TripId};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory implementation of [`ItineraryGateway`]
///
/// Cheap to clone is not a goal; share it behind the reference the store
/// already takes. Failure injection flags let tests exercise the
/// load-failed / save-failed paths without a network.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    docs: RwLock<HashMap<TripId, ItineraryDocument>>,
    fail_fetch: RwLock<bool>,
    fail_persist: RwLock<bool>,
}

impl InMemoryGateway {
    /// Create an empty gateway
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document as if the backend had created it
    ///
    /// Assigns a fresh id when the document carries an empty one, matching
    /// the backend's create-on-trip-creation behavior. Returns the stored
    /// copy.
    pub fn seed(&self, mut doc: ItineraryDocument) -> ItineraryDocument {
        if doc.id.as_str().is_empty() {
            doc.id = ItineraryId::new(Uuid::new_v4().to_string());
        }
        self.docs.write().insert(doc.trip_id.clone(), doc.clone());
        doc
    }

    /// The currently stored document for a trip, if any
    #[must_use]
    pub fn stored(&self, trip: &TripId) -> Option<ItineraryDocument> {
        self.docs.read().get(trip).cloned()
    }

    /// Make subsequent fetches fail with a 500 until cleared
    pub fn set_fail_fetch(&self, fail: bool) {
        *self.fail_fetch.write() = fail;
    }

    /// Make subsequent persists fail with a 500 until cleared
    pub fn set_fail_persist(&self, fail: bool) {
        *self.fail_persist.write() = fail;
    }

    fn injected_failure() -> GatewayError {
        GatewayError::Status {
            status: 500,
            body: "injected failure".to_string(),
        }
    }
}

#[async_trait]
impl ItineraryGateway for InMemoryGateway {
    async fn fetch_by_trip(&self, trip: &TripId) -> Result<ItineraryDocument, GatewayError> {
        if *self.fail_fetch.read() {
            return Err(Self::injected_failure());
        }

        self.docs
            .read()
            .get(trip)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(trip.to_string()))
    }

    async fn persist(&self, doc: &ItineraryDocument) -> Result<ItineraryDocument, GatewayError> {
        if *self.fail_persist.read() {
            return Err(Self::injected_failure());
        }

        let mut docs = self.docs.write();
        let known = docs.values().any(|stored| stored.id == doc.id);
        if !known {
            return Err(GatewayError::NotFound(doc.id.to_string()));
        }

        docs.insert(doc.trip_id.clone(), doc.clone());
        Ok(doc.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use itinerary_model::{sequence, ActivityKind, EntryDetails, NoteFields};
    use pretty_assertions::assert_eq;

    fn seeded() -> (InMemoryGateway, ItineraryDocument) {
        let gw = InMemoryGateway::new();
        let doc = gw.seed(ItineraryDocument::new(
            ItineraryId::new("itin-1"),
            TripId::new("trip-1"),
        ));
        (gw, doc)
    }

    #[tokio::test]
    async fn fetch_returns_seeded_document() {
        let (gw, doc) = seeded();
        let fetched = gw.fetch_by_trip(&doc.trip_id).await.unwrap();
        assert_eq!(fetched, doc);
    }

    #[tokio::test]
    async fn fetch_unknown_trip_is_not_found() {
        let gw = InMemoryGateway::new();
        let err = gw.fetch_by_trip(&TripId::new("missing")).await.unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
    }

    #[tokio::test]
    async fn persist_overwrites_whole_document() {
        let (gw, doc) = seeded();
        let date: NaiveDate = "2025-06-01".parse().unwrap();
        let next = doc.with_date_entries(
            date,
            sequence::append(
                &[],
                date,
                EntryDetails::new("Packing", ActivityKind::Note(NoteFields::default())),
            ),
        );

        let stored = gw.persist(&next).await.unwrap();
        assert_eq!(stored, next);
        assert_eq!(gw.stored(&doc.trip_id).unwrap(), next);
    }

    #[tokio::test]
    async fn persist_unknown_id_is_not_found() {
        let gw = InMemoryGateway::new();
        let doc = ItineraryDocument::new(ItineraryId::new("ghost"), TripId::new("trip-1"));
        let err = gw.persist(&doc).await.unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
    }

    #[tokio::test]
    async fn seed_assigns_id_when_empty() {
        let gw = InMemoryGateway::new();
        let doc = gw.seed(ItineraryDocument::new(
            ItineraryId::new(""),
            TripId::new("trip-1"),
        ));
        assert!(!doc.id.as_str().is_empty());
    }

    #[tokio::test]
    async fn injected_failures_surface_as_status_errors() {
        let (gw, doc) = seeded();
        gw.set_fail_persist(true);

        let err = gw.persist(&doc).await.unwrap_err();
        assert!(err.is_retryable());

        gw.set_fail_persist(false);
        gw.persist(&doc).await.unwrap();
    }
}
