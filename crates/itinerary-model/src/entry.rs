//! Activity entries and their variant payloads
//!
//! One [`ActivityEntry`] is one itinerary item on a specific date. Its
//! payload is an [`ActivityKind`] tagged union, one variant per editor
//! surface. The wire shape nests the payload under `details.customFields`
//! with the variant tag at the entry level:
//!
//! ```json
//! {
//!   "position": 1,
//!   "date": "2025-06-01",
//!   "type": "Note",
//!   "details": { "title": "Packing", "customFields": { "content": "..." } }
//! }
//! ```

use crate::types::{ActivityType, TransportMode};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One itinerary item at a 1-based position within its date
///
/// # Invariants
/// - `position` is unique within the date's sequence; for N entries the
///   positions are exactly {1..N} with no gaps
/// - `date` equals the key of the containing sequence in
///   [`crate::ItineraryDocument::entries_by_date`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    /// 1-based display order within the date
    pub position: u32,
    /// The calendar date this entry belongs to
    pub date: NaiveDate,
    /// Title plus variant payload
    pub details: EntryDetails,
}

impl ActivityEntry {
    /// Create a new entry
    #[inline]
    #[must_use]
    pub fn new(position: u32, date: NaiveDate, details: EntryDetails) -> Self {
        Self {
            position,
            date,
            details,
        }
    }

    /// The variant tag of this entry's payload
    #[inline]
    #[must_use]
    pub fn activity_type(&self) -> ActivityType {
        self.details.custom.activity_type()
    }
}

/// Title plus variant-specific payload of one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetails {
    /// Display title
    pub title: String,
    /// Variant payload (`customFields` on the wire)
    pub custom: ActivityKind,
}

impl EntryDetails {
    /// Create entry details
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, custom: ActivityKind) -> Self {
        Self {
            title: title.into(),
            custom,
        }
    }
}

/// Variant payload of an activity entry
///
/// One variant per editor surface. Things-to-do and lodging share the same
/// field shape; they differ only in tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    ThingsToDo(ScheduledFields),
    PlaceToStay(ScheduledFields),
    Transportation(TransportFields),
    FoodAndDrink(BookingFields),
    Note(NoteFields),
}

impl ActivityKind {
    /// The tag for this variant
    #[inline]
    #[must_use]
    pub fn activity_type(&self) -> ActivityType {
        match self {
            ActivityKind::ThingsToDo(_) => ActivityType::ThingsToDo,
            ActivityKind::PlaceToStay(_) => ActivityType::PlaceToStay,
            ActivityKind::Transportation(_) => ActivityType::Transportation,
            ActivityKind::FoodAndDrink(_) => ActivityType::FoodAndDrink,
            ActivityKind::Note(_) => ActivityType::Note,
        }
    }
}

/// Fields shared by things-to-do and lodging entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_booked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hhmm")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hhmm")]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Fields of one transport leg
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportFields {
    pub transport_mode: TransportMode,
    pub departure_location: String,
    pub arrival_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hhmm")]
    pub departure_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hhmm")]
    pub arrival_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Fields of a food & drink entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_booked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Fields of a note entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// `HH:MM` time-of-day serialization for optional fields
///
/// Accepts `HH:MM:SS` on input for tolerance; always emits `HH:MM`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";
    const FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

    pub(super) fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => NaiveTime::parse_from_str(&s, FORMAT)
                .or_else(|_| NaiveTime::parse_from_str(&s, FORMAT_WITH_SECONDS))
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

// Wire representation: tag at the entry level, payload under
// details.customFields. The payload struct is selected by the tag, so the
// entry (de)serializes through an intermediate and never relies on untagged
// guessing.

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryWire {
    position: u32,
    date: NaiveDate,
    #[serde(rename = "type")]
    kind: ActivityType,
    details: DetailsWire,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailsWire {
    title: String,
    custom_fields: serde_json::Value,
}

impl Serialize for ActivityEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let custom_fields = match &self.details.custom {
            ActivityKind::ThingsToDo(f) | ActivityKind::PlaceToStay(f) => serde_json::to_value(f),
            ActivityKind::Transportation(f) => serde_json::to_value(f),
            ActivityKind::FoodAndDrink(f) => serde_json::to_value(f),
            ActivityKind::Note(f) => serde_json::to_value(f),
        }
        .map_err(serde::ser::Error::custom)?;

        EntryWire {
            position: self.position,
            date: self.date,
            kind: self.details.custom.activity_type(),
            details: DetailsWire {
                title: self.details.title.clone(),
                custom_fields,
            },
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ActivityEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let wire = EntryWire::deserialize(deserializer)?;
        let fields = wire.details.custom_fields;
        let custom = match wire.kind {
            ActivityType::ThingsToDo => {
                ActivityKind::ThingsToDo(serde_json::from_value(fields).map_err(Error::custom)?)
            }
            ActivityType::PlaceToStay => {
                ActivityKind::PlaceToStay(serde_json::from_value(fields).map_err(Error::custom)?)
            }
            ActivityType::Transportation => {
                ActivityKind::Transportation(serde_json::from_value(fields).map_err(Error::custom)?)
            }
            ActivityType::FoodAndDrink => {
                ActivityKind::FoodAndDrink(serde_json::from_value(fields).map_err(Error::custom)?)
            }
            ActivityType::Note => {
                ActivityKind::Note(serde_json::from_value(fields).map_err(Error::custom)?)
            }
        };

        Ok(ActivityEntry {
            position: wire.position,
            date: wire.date,
            details: EntryDetails {
                title: wire.details.title,
                custom,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn note_entry_wire_shape() {
        let entry = ActivityEntry::new(
            1,
            date("2025-06-01"),
            EntryDetails::new(
                "Packing",
                ActivityKind::Note(NoteFields {
                    content: Some("bring sunscreen".to_string()),
                }),
            ),
        );

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "position": 1,
                "date": "2025-06-01",
                "type": "Note",
                "details": {
                    "title": "Packing",
                    "customFields": { "content": "bring sunscreen" }
                }
            })
        );
    }

    #[test]
    fn transportation_entry_round_trip() {
        let entry = ActivityEntry::new(
            2,
            date("2025-06-03"),
            EntryDetails::new(
                "LHR to CDG",
                ActivityKind::Transportation(TransportFields {
                    transport_mode: TransportMode::Flight,
                    departure_location: "London Heathrow".to_string(),
                    arrival_location: "Paris CDG".to_string(),
                    departure_time: Some(time("08:30")),
                    arrival_time: Some(time("10:45")),
                    link: None,
                    reservation_number: Some("AF1681".to_string()),
                    note: None,
                }),
            ),
        );

        let json = serde_json::to_string(&entry).unwrap();
        let back: ActivityEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
        assert_eq!(back.activity_type(), ActivityType::Transportation);
    }

    #[test]
    fn optional_fields_omitted_when_none() {
        let entry = ActivityEntry::new(
            1,
            date("2025-06-01"),
            EntryDetails::new("Louvre", ActivityKind::ThingsToDo(ScheduledFields::default())),
        );

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["details"]["customFields"], json!({}));
    }

    #[test]
    fn times_serialize_as_hh_mm() {
        let entry = ActivityEntry::new(
            1,
            date("2025-06-01"),
            EntryDetails::new(
                "Louvre",
                ActivityKind::ThingsToDo(ScheduledFields {
                    start_time: Some(time("09:00")),
                    end_time: Some(time("12:30")),
                    ..ScheduledFields::default()
                }),
            ),
        );

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["details"]["customFields"]["startTime"], json!("09:00"));
        assert_eq!(value["details"]["customFields"]["endTime"], json!("12:30"));
    }

    #[test]
    fn times_with_seconds_accepted_on_input() {
        let value = json!({
            "position": 1,
            "date": "2025-06-01",
            "type": "PlaceToStay",
            "details": {
                "title": "Hotel",
                "customFields": { "startTime": "15:00:00" }
            }
        });

        let entry: ActivityEntry = serde_json::from_value(value).unwrap();
        match &entry.details.custom {
            ActivityKind::PlaceToStay(f) => assert_eq!(f.start_time, Some(time("15:00"))),
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let value = json!({
            "position": 1,
            "date": "2025-06-01",
            "type": "Excursion",
            "details": { "title": "x", "customFields": {} }
        });

        assert!(serde_json::from_value::<ActivityEntry>(value).is_err());
    }

    #[test]
    fn payload_is_selected_by_tag() {
        // Identical empty payloads deserialize to different variants by tag
        let make = |tag: &str| {
            json!({
                "position": 1,
                "date": "2025-06-01",
                "type": tag,
                "details": { "title": "x", "customFields": {} }
            })
        };

        let food: ActivityEntry = serde_json::from_value(make("FoodAndDrink")).unwrap();
        assert_eq!(food.activity_type(), ActivityType::FoodAndDrink);

        let note: ActivityEntry = serde_json::from_value(make("Note")).unwrap();
        assert_eq!(note.activity_type(), ActivityType::Note);
    }
}
