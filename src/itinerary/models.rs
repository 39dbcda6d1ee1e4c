//! Itinerary data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Itinerary ID type
pub type ItineraryId = Uuid;

/// Day ID type
pub type DayId = Uuid;

/// Activity ID type
pub type ActivityId = Uuid;

/// Kind of trip being planned
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    Solo,
    Couple,
    Family,
    Group,
    Business,
}

impl TravelType {
    /// All variants, in display order. Used by filter chips.
    pub const ALL: [TravelType; 5] = [
        TravelType::Solo,
        TravelType::Couple,
        TravelType::Family,
        TravelType::Group,
        TravelType::Business,
    ];
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelType::Solo => write!(f, "solo"),
            TravelType::Couple => write!(f, "couple"),
            TravelType::Family => write!(f, "family"),
            TravelType::Group => write!(f, "group"),
            TravelType::Business => write!(f, "business"),
        }
    }
}

/// Hotel price bracket
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HotelCategory {
    Budget,
    MidRange,
    Luxury,
}

impl fmt::Display for HotelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotelCategory::Budget => write!(f, "budget"),
            HotelCategory::MidRange => write!(f, "mid-range"),
            HotelCategory::Luxury => write!(f, "luxury"),
        }
    }
}

/// Category of a planned activity
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Sightseeing,
    Dining,
    Entertainment,
    Shopping,
    Transport,
    Accommodation,
    Custom,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::Sightseeing => write!(f, "sightseeing"),
            ActivityType::Dining => write!(f, "dining"),
            ActivityType::Entertainment => write!(f, "entertainment"),
            ActivityType::Shopping => write!(f, "shopping"),
            ActivityType::Transport => write!(f, "transport"),
            ActivityType::Accommodation => write!(f, "accommodation"),
            ActivityType::Custom => write!(f, "custom"),
        }
    }
}

/// A single planned activity within a day
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Activity {
    pub id: ActivityId,
    pub activity_type: ActivityType,
    pub title: String,
    /// Time-of-day string, e.g. "10:00". Display ordering compares these
    /// lexicographically.
    pub time: String,
    /// Duration in hours, at least 0.5
    pub duration_hours: f64,
    /// Cost in the trip currency, never negative
    pub cost: f64,
    pub location: String,
    pub description: String,
}

/// One day of an itinerary. Activities keep insertion order for editing;
/// time-sorted display is a preview concern.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Day {
    pub id: DayId,
    /// Date string in `YYYY-MM-DD` form, possibly empty while drafting
    pub date: String,
    pub destination: String,
    pub image: Option<String>,
    pub activities: Vec<Activity>,
}

impl Day {
    /// A blank day as materialized by the creator wizard.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            date: String::new(),
            destination: String::new(),
            image: None,
            activities: Vec::new(),
        }
    }
}

/// Denormalized author summary carried on every itinerary
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// A stored itinerary record
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Itinerary {
    pub id: ItineraryId,
    pub title: String,
    pub destination: String,
    /// Trip length in days. Equals `days.len()` at creation; later edits to
    /// this field do not resize the day list.
    pub duration: u32,
    pub travelers: u32,
    pub travel_type: TravelType,
    pub hotel_category: HotelCategory,
    pub days: Vec<Day>,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub is_public: bool,
    pub cover_image: Option<String>,
}

/// Everything needed to create an itinerary; the store mints the id and
/// creation timestamp.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ItineraryDraft {
    pub title: String,
    pub destination: String,
    pub duration: u32,
    pub travelers: u32,
    pub travel_type: TravelType,
    pub hotel_category: HotelCategory,
    pub days: Vec<Day>,
    pub author: Author,
    pub is_public: bool,
    pub cover_image: Option<String>,
}

/// Partial itinerary update: only the present fields are applied
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ItineraryUpdate {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub duration: Option<u32>,
    pub travelers: Option<u32>,
    pub travel_type: Option<TravelType>,
    pub hotel_category: Option<HotelCategory>,
    pub days: Option<Vec<Day>>,
    pub is_public: Option<bool>,
    pub cover_image: Option<Option<String>>,
}

/// An activity about to be added; the store mints the id
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ActivityDraft {
    pub activity_type: ActivityType,
    pub title: String,
    pub time: String,
    pub duration_hours: f64,
    pub cost: f64,
    pub location: String,
    pub description: String,
}

/// Partial activity update: only the present fields are applied
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ActivityUpdate {
    pub activity_type: Option<ActivityType>,
    pub title: Option<String>,
    pub time: Option<String>,
    pub duration_hours: Option<f64>,
    pub cost: Option<f64>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_type_wire_spelling() {
        let json = serde_json::to_string(&TravelType::Business).unwrap();
        assert_eq!(json, r#""business""#);
        let back: TravelType = serde_json::from_str(r#""couple""#).unwrap();
        assert_eq!(back, TravelType::Couple);
    }

    #[test]
    fn test_hotel_category_wire_spelling() {
        // "mid-range" carries a hyphen on the wire
        let json = serde_json::to_string(&HotelCategory::MidRange).unwrap();
        assert_eq!(json, r#""mid-range""#);
        let back: HotelCategory = serde_json::from_str(r#""mid-range""#).unwrap();
        assert_eq!(back, HotelCategory::MidRange);
    }

    #[test]
    fn test_activity_type_display_matches_wire() {
        for kind in [
            ActivityType::Sightseeing,
            ActivityType::Dining,
            ActivityType::Entertainment,
            ActivityType::Shopping,
            ActivityType::Transport,
            ActivityType::Accommodation,
            ActivityType::Custom,
        ] {
            let wire = serde_json::to_string(&kind).unwrap();
            assert_eq!(wire, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_blank_day_has_no_activities() {
        let day = Day::blank();
        assert!(day.date.is_empty());
        assert!(day.destination.is_empty());
        assert!(day.image.is_none());
        assert!(day.activities.is_empty());
    }

    #[test]
    fn test_blank_days_get_distinct_ids() {
        assert_ne!(Day::blank().id, Day::blank().id);
    }
}
