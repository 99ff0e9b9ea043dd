//! Identifier and tag types for the itinerary model
//!
//! Defines the fundamental types shared across the model:
//! - Document and trip identifiers
//! - Activity variant tags
//! - Transport modes

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque itinerary document identifier, assigned by the gateway
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItineraryId(pub String);

impl ItineraryId {
    /// Wrap an identifier string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Foreign key to the trip that owns an itinerary document
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub String);

impl TripId {
    /// Wrap an identifier string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Activity variant tag, serialized as the entry-level `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    /// Sightseeing, tours, and other bookable activities
    ThingsToDo,
    /// Lodging for one or more nights
    PlaceToStay,
    /// One transport leg (flight, train, car, bus)
    Transportation,
    /// Restaurant, cafe, or bar reservation
    FoodAndDrink,
    /// Free-form note attached to a date
    Note,
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ActivityType::ThingsToDo => "ThingsToDo",
            ActivityType::PlaceToStay => "PlaceToStay",
            ActivityType::Transportation => "Transportation",
            ActivityType::FoodAndDrink => "FoodAndDrink",
            ActivityType::Note => "Note",
        };
        write!(f, "{tag}")
    }
}

/// Mode of a transport leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    Flight,
    Train,
    Car,
    Bus,
}

impl TransportMode {
    /// All modes, in form display order
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Flight,
        TransportMode::Train,
        TransportMode::Car,
        TransportMode::Bus,
    ];
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self {
            TransportMode::Flight => "Flight",
            TransportMode::Train => "Train",
            TransportMode::Car => "Car",
            TransportMode::Bus => "Bus",
        };
        write!(f, "{mode}")
    }
}

impl FromStr for TransportMode {
    type Err = UnknownTransportMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Flight" => Ok(TransportMode::Flight),
            "Train" => Ok(TransportMode::Train),
            "Car" => Ok(TransportMode::Car),
            "Bus" => Ok(TransportMode::Bus),
            other => Err(UnknownTransportMode(other.to_string())),
        }
    }
}

/// Error for unrecognized transport mode strings
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct UnknownTransportMode(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itinerary_id_display_round_trip() {
        let id = ItineraryId::new("itin-42");
        assert_eq!(id.to_string(), "itin-42");
        assert_eq!(id.as_str(), "itin-42");
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&TripId::new("t1")).unwrap();
        assert_eq!(json, "\"t1\"");
    }

    #[test]
    fn activity_type_tag_is_pascal_case() {
        let json = serde_json::to_string(&ActivityType::ThingsToDo).unwrap();
        assert_eq!(json, "\"ThingsToDo\"");
        assert_eq!(ActivityType::FoodAndDrink.to_string(), "FoodAndDrink");
    }

    #[test]
    fn transport_mode_from_str() {
        assert_eq!("Flight".parse::<TransportMode>().unwrap(), TransportMode::Flight);
        assert_eq!("Bus".parse::<TransportMode>().unwrap(), TransportMode::Bus);
        assert!("Boat".parse::<TransportMode>().is_err());
    }

    #[test]
    fn transport_mode_display_matches_parse() {
        for mode in TransportMode::ALL {
            assert_eq!(mode.to_string().parse::<TransportMode>().unwrap(), mode);
        }
    }
}
