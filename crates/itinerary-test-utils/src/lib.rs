//! Testing utilities for the itinerary workspace
//!
//! Shared fixtures: documents, entries, seeded gateways and stores.

#![allow(missing_docs)]

use chrono::NaiveDate;
use itinerary_gateway::InMemoryGateway;
use itinerary_model::{
    sequence, ActivityKind, EntryDetails, ItineraryDocument, ItineraryId, NoteFields,
    ScheduledFields, TripId,
};
use itinerary_store::ItineraryStore;

pub const TEST_TRIP: &str = "trip-1";
pub const TEST_ITINERARY: &str = "itin-1";

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("test date")
}

pub fn note_details(title: &str, content: &str) -> EntryDetails {
    EntryDetails::new(
        title,
        ActivityKind::Note(NoteFields {
            content: if content.is_empty() {
                None
            } else {
                Some(content.to_string())
            },
        }),
    )
}

pub fn things_to_do_details(title: &str) -> EntryDetails {
    EntryDetails::new(title, ActivityKind::ThingsToDo(ScheduledFields::default()))
}

/// An empty document for [`TEST_TRIP`] with one empty date
pub fn empty_document(day: &str) -> ItineraryDocument {
    let mut doc = ItineraryDocument::new(
        ItineraryId::new(TEST_ITINERARY),
        TripId::new(TEST_TRIP),
    );
    doc.entries_by_date.insert(date(day), vec![]);
    doc
}

/// A document with `titles.len()` note entries on one date
pub fn document_with_notes(day: &str, titles: &[&str]) -> ItineraryDocument {
    let d = date(day);
    let mut entries = vec![];
    for title in titles {
        entries = sequence::append(&entries, d, note_details(title, ""));
    }
    empty_document(day).with_date_entries(d, entries)
}

/// Gateway pre-seeded with a document
pub fn seeded_gateway(doc: ItineraryDocument) -> InMemoryGateway {
    let gateway = InMemoryGateway::new();
    gateway.seed(doc);
    gateway
}

/// Store over a seeded gateway with the document already loaded
pub async fn loaded_store(doc: ItineraryDocument) -> ItineraryStore<InMemoryGateway> {
    let trip = doc.trip_id.clone();
    let mut store = ItineraryStore::new(seeded_gateway(doc));
    store.load(&trip).await.expect("load seeded document");
    store
}
