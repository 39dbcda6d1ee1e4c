//! Sample itineraries used to seed the store.

use super::models::{
    Activity, ActivityType, Author, Day, HotelCategory, Itinerary, TravelType,
};
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

fn seed_timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The two sample records every fresh store starts with: a Paris weekend
/// and a Kyoto culture trip.
pub fn sample_itineraries() -> Vec<Itinerary> {
    vec![paris_weekend(), kyoto_culture_trip()]
}

fn paris_weekend() -> Itinerary {
    Itinerary {
        id: Uuid::new_v4(),
        title: "Weekend Getaway to Paris".to_string(),
        destination: "Paris, France".to_string(),
        duration: 3,
        travelers: 2,
        travel_type: TravelType::Couple,
        hotel_category: HotelCategory::MidRange,
        days: vec![Day {
            id: Uuid::new_v4(),
            date: "2024-03-15".to_string(),
            destination: "Eiffel Tower District".to_string(),
            image: None,
            activities: vec![
                Activity {
                    id: Uuid::new_v4(),
                    activity_type: ActivityType::Sightseeing,
                    title: "Eiffel Tower Visit".to_string(),
                    time: "10:00 AM".to_string(),
                    duration_hours: 2.0,
                    cost: 25.0,
                    location: "Eiffel Tower".to_string(),
                    description: "Visit the iconic Eiffel Tower and enjoy the view from the top"
                        .to_string(),
                },
                Activity {
                    id: Uuid::new_v4(),
                    activity_type: ActivityType::Dining,
                    title: "Lunch at Le Jules Verne".to_string(),
                    time: "1:00 PM".to_string(),
                    duration_hours: 1.0,
                    cost: 120.0,
                    location: "Le Jules Verne".to_string(),
                    description: "Fine dining with a view of Paris".to_string(),
                },
            ],
        }],
        author: Author {
            id: "user1".to_string(),
            name: "Sarah Miller".to_string(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=32&h=32&fit=crop&crop=face"
                .to_string(),
        },
        created_at: seed_timestamp(2024, 3, 1),
        is_public: true,
        cover_image: None,
    }
}

fn kyoto_culture_trip() -> Itinerary {
    Itinerary {
        id: Uuid::new_v4(),
        title: "Cultural Journey to Kyoto".to_string(),
        destination: "Kyoto, Japan".to_string(),
        duration: 5,
        travelers: 1,
        travel_type: TravelType::Solo,
        hotel_category: HotelCategory::Budget,
        days: vec![Day {
            id: Uuid::new_v4(),
            date: "2024-04-10".to_string(),
            destination: "Temple District".to_string(),
            image: None,
            activities: vec![Activity {
                id: Uuid::new_v4(),
                activity_type: ActivityType::Sightseeing,
                title: "Kiyomizu-dera Temple".to_string(),
                time: "9:00 AM".to_string(),
                duration_hours: 2.0,
                cost: 15.0,
                location: "Kiyomizu-dera Temple".to_string(),
                description: "Visit the famous wooden temple with panoramic city views"
                    .to_string(),
            }],
        }],
        author: Author {
            id: "user2".to_string(),
            name: "James Davis".to_string(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=32&h=32&fit=crop&crop=face"
                .to_string(),
        },
        created_at: seed_timestamp(2024, 3, 15),
        is_public: true,
        cover_image: None,
    }
}
