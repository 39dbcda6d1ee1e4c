//! Itinerary records and the store that owns them.
//!
//! The store is the single owner of the itinerary collection. Consumers
//! read snapshots and mutate through the six store operations (create,
//! update, delete, and the three per-activity operations); nothing else
//! touches the collection. Query logic for the explore page lives in
//! [`filter`], the sample records in [`seed`].

pub mod errors;
pub mod filter;
pub mod models;
pub mod seed;
pub mod store;

pub use errors::{ItineraryError, ItineraryResult};
pub use filter::ItineraryFilter;
pub use models::{
    Activity, ActivityDraft, ActivityId, ActivityType, ActivityUpdate, Author, Day, DayId,
    HotelCategory, Itinerary, ItineraryDraft, ItineraryId, ItineraryUpdate, TravelType,
};
pub use store::ItineraryStore;
