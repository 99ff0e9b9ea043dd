//! Itinerary Gateway
//!
//! The sole boundary between the itinerary core and the backend that stores
//! documents. The [`ItineraryGateway`] trait carries exactly two operations:
//! fetch a trip's document and persist a full replacement. Everything else
//! (auth headers, transport retry policy) belongs to collaborators outside
//! this workspace.
//!
//! Two implementations:
//! - [`RestGateway`]: JSON over HTTP against the trip-plan service
//! - [`InMemoryGateway`]: map-backed double for tests and simulations

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod config;
mod error;
mod memory;
mod rest;

use async_trait::async_trait;
use itinerary_model::{ItineraryDocument, TripId};

// Re-exports
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use memory::InMemoryGateway;
pub use rest::RestGateway;

/// Remote itinerary storage boundary
///
/// Persistence is whole-document: `persist` overwrites the stored copy and
/// returns the backend's accepted version, which callers must adopt as the
/// new source of truth. There is no partial update and no server-side merge;
/// concurrent writers to the same document race with last-writer-wins.
#[async_trait]
pub trait ItineraryGateway: Send + Sync {
    /// Fetch the itinerary document owned by `trip`
    ///
    /// # Errors
    /// [`GatewayError::NotFound`] if the trip has no document;
    /// [`GatewayError::Transport`] / [`GatewayError::Status`] on failures.
    async fn fetch_by_trip(&self, trip: &TripId) -> Result<ItineraryDocument, GatewayError>;

    /// Persist a full document, returning the stored copy
    ///
    /// # Errors
    /// [`GatewayError::NotFound`] if the document id is unknown;
    /// [`GatewayError::Transport`] / [`GatewayError::Status`] on failures.
    async fn persist(&self, doc: &ItineraryDocument) -> Result<ItineraryDocument, GatewayError>;
}

#[async_trait]
impl<G: ItineraryGateway + ?Sized> ItineraryGateway for std::sync::Arc<G> {
    async fn fetch_by_trip(&self, trip: &TripId) -> Result<ItineraryDocument, GatewayError> {
        (**self).fetch_by_trip(trip).await
    }

    async fn persist(&self, doc: &ItineraryDocument) -> Result<ItineraryDocument, GatewayError> {
        (**self).persist(doc).await
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
