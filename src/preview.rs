//! Pure computations backing the itinerary preview.
//!
//! Everything here is read-only over a candidate or stored itinerary:
//! cost totals, the time-sorted activity view, and date formatting.

use crate::itinerary::{Activity, Day, Itinerary};
use chrono::NaiveDate;

/// Total cost of the trip: every activity cost across every day.
pub fn total_cost(itinerary: &Itinerary) -> f64 {
    itinerary.days.iter().map(day_cost).sum()
}

/// Subtotal for one day.
pub fn day_cost(day: &Day) -> f64 {
    day.activities.iter().map(|activity| activity.cost).sum()
}

/// Number of activities planned across the whole trip.
pub fn total_activities(itinerary: &Itinerary) -> usize {
    itinerary.days.iter().map(|day| day.activities.len()).sum()
}

/// A day's activities in display order: sorted by lexicographic comparison
/// of the time-of-day strings. The day's own insertion order is untouched.
pub fn activities_by_time(day: &Day) -> Vec<&Activity> {
    let mut activities: Vec<&Activity> = day.activities.iter().collect();
    activities.sort_by(|a, b| a.time.cmp(&b.time));
    activities
}

/// Format a `YYYY-MM-DD` date string for display, e.g. "Mar 15, 2024".
/// Anything unparseable is returned verbatim.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
