//! Trip planning data models
//!
//! Defines the trip request submitted by the form client and the
//! itinerary contract the client renders against

use serde::{Deserialize, Serialize};

/// Trip preferences submitted by the form client
///
/// All four fields are free-form strings substituted directly into the
/// prompt template. No shape or range validation is performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination city or region
    pub destination: String,
    /// Total budget in INR, as entered by the user
    pub budget: String,
    /// Trip duration in days, as entered by the user
    pub days: String,
    /// Comma-separated interests (e.g. "beaches, food")
    pub interests: String,
}

/// Complete day-by-day itinerary returned to the client
///
/// Deserializing the provider output into this type is the structure
/// validation: missing fields or non-numeric costs fail the parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Trip title (e.g. "A Wonderful 3-Day Trip to Goa")
    pub trip_title: String,
    /// Total estimated cost in INR
    pub total_estimated_cost: f64,
    /// One entry per day, in day order
    pub itinerary: Vec<DayPlan>,
    /// Suggested accommodation for the whole trip
    pub accommodation_suggestion: AccommodationSuggestion,
    /// Concluding summary of the plan
    pub summary: String,
}

/// Plan for a single day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Day number, starting at 1
    pub day: u32,
    /// Theme for the day (e.g. "Arrival & Local Exploration")
    pub theme: String,
    /// Activities in their scheduled order
    pub activities: Vec<Activity>,
    /// Estimated cost for the day in INR
    ///
    /// Requested to equal the sum of the day's activity costs, but the
    /// model output is not checked against that invariant.
    pub daily_total_cost: f64,
}

/// A single scheduled activity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Time slot (e.g. "Morning" or "2:00 PM")
    pub time: String,
    /// Activity name
    pub activity: String,
    /// Brief description
    pub description: String,
    /// Estimated cost in INR
    pub estimated_cost: f64,
}

/// Suggested accommodation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationSuggestion {
    /// Accommodation category (e.g. "Mid-Range Hotel")
    #[serde(rename = "type")]
    pub accommodation_type: String,
    /// Suggested name
    pub name: String,
    /// Estimated cost per night in INR
    pub estimated_cost_per_night: f64,
}
