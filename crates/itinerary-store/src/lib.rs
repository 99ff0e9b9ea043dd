//! Itinerary Store
//!
//! The single owner of one trip's in-memory itinerary between a load and
//! the next load or save. Every editor surface mutates the itinerary
//! through one choke point, [`ItineraryStore::replace_date_entries`], which
//! performs the read-modify-write protocol: clone the held document with
//! one date's sequence replaced, persist the whole thing, adopt the
//! backend's accepted copy.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut store = ItineraryStore::new(gateway);
//! store.load(&trip).await?;
//! store.select_date(date);
//!
//! let next = sequence::append(store.current_entries(), date, details);
//! store.replace_date_entries(date, next).await?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod store;

pub use error::StoreError;
pub use store::ItineraryStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
