//! # Trip Gullack
//!
//! The state layer of a travel itinerary planner: browsing, creating, and
//! previewing trips, plus a mock authentication flow persisted to durable
//! key-value storage.
//!
//! Everything is direct, synchronous state manipulation; the only suspend
//! points are the simulated network latency of login and signup. Stores are
//! cheaply clonable handles over shared state, owned by a composition root
//! and handed to whatever renders them.
//!
//! ## Core Modules
//!
//! - [`auth`]: mock login/signup/logout with hydration from storage
//! - [`itinerary`]: itinerary records and the store that owns them
//! - [`creator`]: the two-step creation wizard
//! - [`preview`]: read-only cost, ordering, and date computations
//! - [`storage`]: the durable key-value trait and its backends
//!
//! ## Example
//!
//! ```
//! use trip_gullack::{CreatorWizard, ItineraryStore, preview};
//!
//! let store = ItineraryStore::new();
//!
//! let mut wizard = CreatorWizard::new();
//! wizard.set_title("Weekend in Lisbon");
//! wizard.set_destination("Lisbon, Portugal");
//! wizard.set_duration_input("3");
//! wizard.submit_overview();
//!
//! let saved = wizard.save(&store).unwrap();
//! assert_eq!(saved.days.len(), 3);
//! assert_eq!(preview::total_cost(&saved), 0.0);
//! ```

/// Mock authentication and the persisted user record.
pub mod auth;
pub use auth::{AuthError, AuthManager, AuthResult, User};

/// Itinerary records, store, queries, and seed data.
pub mod itinerary;
pub use itinerary::{
    Activity, ActivityDraft, ActivityType, ActivityUpdate, Author, Day, HotelCategory, Itinerary,
    ItineraryDraft, ItineraryError, ItineraryFilter, ItineraryStore, ItineraryUpdate, TravelType,
};

/// The two-step itinerary creation wizard.
pub mod creator;
pub use creator::{CreatorError, CreatorWizard};

/// Pure preview computations.
pub mod preview;

/// Durable key-value storage backends.
pub mod storage;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
