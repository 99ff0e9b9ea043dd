//! Itinerary Editor Surfaces
//!
//! The five editor surfaces (things to do, place to stay, transportation,
//! food & drink, note) as typed drafts plus the shared submit state
//! machine. Each draft validates into [`itinerary_model::EntryDetails`];
//! each submission goes through
//! [`itinerary_store::ItineraryStore::replace_date_entries`], the single
//! mutation choke point.
//!
//! # Core Concepts
//!
//! - [`EditorDraft`]: validate raw form state into entry details
//! - [`ValidationErrors`]: inline field feedback, resolved client-side
//! - [`SubmitMode`]: explicit create vs. update-at-position
//! - [`EditorSession`]: `Idle → Editing → Submitting → Succeeded/Failed`

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod draft;
mod session;
mod validation;

pub use draft::{
    EditorDraft, FoodAndDrinkDraft, NoteDraft, PlaceToStayDraft, ThingsToDoDraft,
    TransportationDraft,
};
pub use session::{EditorSession, EditorState, SubmitError, SubmitMode};
pub use validation::{FieldError, FieldId, ValidationErrors};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
