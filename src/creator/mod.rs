//! Two-step itinerary creator wizard.
//!
//! Step one collects the trip overview; the transition to step two
//! materializes one blank day per unit of duration. Step two fills days in
//! and runs the activity sub-form. Saving hands the accumulated draft to
//! the itinerary store.

pub mod errors;
pub mod wizard;

pub use errors::{CreatorError, CreatorResult};
pub use wizard::{ActivityForm, CreatorWizard, OverviewForm, Step};
