//! Itinerary Document Model
//!
//! The canonical data model for one trip's itinerary: a date-keyed map of
//! ordered activity entries, plus the pure sequence operations every editor
//! uses to produce a replacement day.
//!
//! # Core Concepts
//!
//! - [`ItineraryDocument`]: the full per-trip structure, one ordered entry
//!   sequence per calendar date
//! - [`ActivityEntry`]: one itinerary item at a 1-based `position` within
//!   its date
//! - [`ActivityKind`]: tagged payload per activity variant (things to do,
//!   lodging, transport leg, meal, note)
//! - [`sequence`]: append / update / remove operations that keep positions
//!   gap-free
//!
//! # Example
//!
//! ```rust,ignore
//! use itinerary_model::{ActivityKind, EntryDetails, NoteFields, sequence};
//!
//! let details = EntryDetails::new("Packing", ActivityKind::Note(NoteFields {
//!     content: Some("bring sunscreen".to_string()),
//! }));
//! let day = sequence::append(&[], date, details);
//! assert_eq!(day[0].position, 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod document;
mod entry;
mod error;
mod types;

/// Pure per-date sequence operations
pub mod sequence;

// Re-exports
pub use document::ItineraryDocument;
pub use entry::{
    ActivityEntry, ActivityKind, BookingFields, EntryDetails, NoteFields, ScheduledFields,
    TransportFields,
};
pub use error::ModelError;
pub use types::{ActivityType, ItineraryId, TransportMode, TripId, UnknownTransportMode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
