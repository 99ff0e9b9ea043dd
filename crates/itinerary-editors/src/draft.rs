//! Per-surface draft state and validation
//!
//! Each editor surface collects raw form state into a draft struct. A draft
//! validates into [`EntryDetails`] or a set of field errors; nothing
//! invalid ever reaches the store. Text fields are kept raw and trimmed at
//! validation time; times come from pickers and are already structured.

use crate::validation::{FieldError, FieldId, ValidationErrors};
use chrono::NaiveTime;
use itinerary_model::{
    ActivityEntry, ActivityKind, BookingFields, EntryDetails, NoteFields, ScheduledFields,
    TransportFields, TransportMode,
};

/// Fallback title for blank note drafts
const DEFAULT_NOTE_TITLE: &str = "Note";

/// Trim a raw text field; empty means unset
fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Start must not be after end when both are present (equality allowed)
fn check_time_order(
    errors: &mut ValidationErrors,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    start_field: FieldId,
) {
    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            errors.push(FieldError::new(
                start_field,
                "start time must not be after end time",
            ));
        }
    }
}

/// A draft that can validate into entry details
pub trait EditorDraft {
    /// Validate the draft into submittable entry details
    ///
    /// # Errors
    /// Returns every field error found in one pass.
    fn validate(&self) -> Result<EntryDetails, ValidationErrors>;
}

/// Draft for a things-to-do entry
#[derive(Debug, Clone, Default)]
pub struct ThingsToDoDraft {
    pub title: String,
    pub is_booked: Option<bool>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub link: String,
    pub reservation_number: String,
    pub note: String,
}

impl ThingsToDoDraft {
    /// Prefill from an existing entry for update mode
    ///
    /// Returns `None` when the entry is a different variant.
    #[must_use]
    pub fn from_entry(entry: &ActivityEntry) -> Option<Self> {
        let ActivityKind::ThingsToDo(f) = &entry.details.custom else {
            return None;
        };
        Some(Self {
            title: entry.details.title.clone(),
            is_booked: f.is_booked,
            start_time: f.start_time,
            end_time: f.end_time,
            link: f.link.clone().unwrap_or_default(),
            reservation_number: f.reservation_number.clone().unwrap_or_default(),
            note: f.note.clone().unwrap_or_default(),
        })
    }

    fn scheduled_fields(&self) -> ScheduledFields {
        ScheduledFields {
            is_booked: self.is_booked,
            start_time: self.start_time,
            end_time: self.end_time,
            link: optional(&self.link),
            reservation_number: optional(&self.reservation_number),
            note: optional(&self.note),
        }
    }
}

impl EditorDraft for ThingsToDoDraft {
    fn validate(&self) -> Result<EntryDetails, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = optional(&self.title);
        if title.is_none() {
            errors.push_required(FieldId::Title);
        }
        check_time_order(&mut errors, self.start_time, self.end_time, FieldId::StartTime);

        let details = EntryDetails::new(
            title.unwrap_or_default(),
            ActivityKind::ThingsToDo(self.scheduled_fields()),
        );
        errors.into_result(details)
    }
}

/// Draft for a lodging entry
///
/// Same field shape as [`ThingsToDoDraft`]; only the variant tag differs.
#[derive(Debug, Clone, Default)]
pub struct PlaceToStayDraft {
    pub title: String,
    pub is_booked: Option<bool>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub link: String,
    pub reservation_number: String,
    pub note: String,
}

impl PlaceToStayDraft {
    /// Prefill from an existing entry for update mode
    #[must_use]
    pub fn from_entry(entry: &ActivityEntry) -> Option<Self> {
        let ActivityKind::PlaceToStay(f) = &entry.details.custom else {
            return None;
        };
        Some(Self {
            title: entry.details.title.clone(),
            is_booked: f.is_booked,
            start_time: f.start_time,
            end_time: f.end_time,
            link: f.link.clone().unwrap_or_default(),
            reservation_number: f.reservation_number.clone().unwrap_or_default(),
            note: f.note.clone().unwrap_or_default(),
        })
    }
}

impl EditorDraft for PlaceToStayDraft {
    fn validate(&self) -> Result<EntryDetails, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = optional(&self.title);
        if title.is_none() {
            errors.push_required(FieldId::Title);
        }
        check_time_order(&mut errors, self.start_time, self.end_time, FieldId::StartTime);

        let details = EntryDetails::new(
            title.unwrap_or_default(),
            ActivityKind::PlaceToStay(ScheduledFields {
                is_booked: self.is_booked,
                start_time: self.start_time,
                end_time: self.end_time,
                link: optional(&self.link),
                reservation_number: optional(&self.reservation_number),
                note: optional(&self.note),
            }),
        );
        errors.into_result(details)
    }
}

/// Draft for one transport leg
#[derive(Debug, Clone, Default)]
pub struct TransportationDraft {
    pub title: String,
    pub transport_mode: Option<TransportMode>,
    pub departure_location: String,
    pub arrival_location: String,
    pub departure_time: Option<NaiveTime>,
    pub arrival_time: Option<NaiveTime>,
    pub link: String,
    pub reservation_number: String,
    pub note: String,
}

impl TransportationDraft {
    /// Prefill from an existing entry for update mode
    #[must_use]
    pub fn from_entry(entry: &ActivityEntry) -> Option<Self> {
        let ActivityKind::Transportation(f) = &entry.details.custom else {
            return None;
        };
        Some(Self {
            title: entry.details.title.clone(),
            transport_mode: Some(f.transport_mode),
            departure_location: f.departure_location.clone(),
            arrival_location: f.arrival_location.clone(),
            departure_time: f.departure_time,
            arrival_time: f.arrival_time,
            link: f.link.clone().unwrap_or_default(),
            reservation_number: f.reservation_number.clone().unwrap_or_default(),
            note: f.note.clone().unwrap_or_default(),
        })
    }
}

impl EditorDraft for TransportationDraft {
    fn validate(&self) -> Result<EntryDetails, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = optional(&self.title);
        if title.is_none() {
            errors.push_required(FieldId::Title);
        }
        if self.transport_mode.is_none() {
            errors.push_required(FieldId::TransportMode);
        }
        let departure = optional(&self.departure_location);
        if departure.is_none() {
            errors.push_required(FieldId::DepartureLocation);
        }
        let arrival = optional(&self.arrival_location);
        if arrival.is_none() {
            errors.push_required(FieldId::ArrivalLocation);
        }
        check_time_order(
            &mut errors,
            self.departure_time,
            self.arrival_time,
            FieldId::DepartureTime,
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        // All required fields checked above
        let details = EntryDetails::new(
            title.unwrap_or_default(),
            ActivityKind::Transportation(TransportFields {
                transport_mode: self.transport_mode.unwrap_or(TransportMode::Flight),
                departure_location: departure.unwrap_or_default(),
                arrival_location: arrival.unwrap_or_default(),
                departure_time: self.departure_time,
                arrival_time: self.arrival_time,
                link: optional(&self.link),
                reservation_number: optional(&self.reservation_number),
                note: optional(&self.note),
            }),
        );
        Ok(details)
    }
}

/// Draft for a food & drink entry
#[derive(Debug, Clone, Default)]
pub struct FoodAndDrinkDraft {
    pub title: String,
    pub is_booked: Option<bool>,
    pub link: String,
    pub reservation_number: String,
    pub note: String,
}

impl FoodAndDrinkDraft {
    /// Prefill from an existing entry for update mode
    #[must_use]
    pub fn from_entry(entry: &ActivityEntry) -> Option<Self> {
        let ActivityKind::FoodAndDrink(f) = &entry.details.custom else {
            return None;
        };
        Some(Self {
            title: entry.details.title.clone(),
            is_booked: f.is_booked,
            link: f.link.clone().unwrap_or_default(),
            reservation_number: f.reservation_number.clone().unwrap_or_default(),
            note: f.note.clone().unwrap_or_default(),
        })
    }
}

impl EditorDraft for FoodAndDrinkDraft {
    fn validate(&self) -> Result<EntryDetails, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = optional(&self.title);
        if title.is_none() {
            errors.push_required(FieldId::Title);
        }

        let details = EntryDetails::new(
            title.unwrap_or_default(),
            ActivityKind::FoodAndDrink(BookingFields {
                is_booked: self.is_booked,
                link: optional(&self.link),
                reservation_number: optional(&self.reservation_number),
                note: optional(&self.note),
            }),
        );
        errors.into_result(details)
    }
}

/// Draft for a note entry
///
/// The only surface with no required field: a blank title falls back to
/// "Note".
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// Prefill from an existing entry for update mode
    #[must_use]
    pub fn from_entry(entry: &ActivityEntry) -> Option<Self> {
        let ActivityKind::Note(f) = &entry.details.custom else {
            return None;
        };
        Some(Self {
            title: entry.details.title.clone(),
            content: f.content.clone().unwrap_or_default(),
        })
    }
}

impl EditorDraft for NoteDraft {
    fn validate(&self) -> Result<EntryDetails, ValidationErrors> {
        let title = optional(&self.title).unwrap_or_else(|| DEFAULT_NOTE_TITLE.to_string());
        Ok(EntryDetails::new(
            title,
            ActivityKind::Note(NoteFields {
                content: optional(&self.content),
            }),
        ))
    }
}
