//! Service layer module
//!
//! Contains the Gemini HTTP client and the itinerary planning pipeline

pub mod client;
pub mod planner;

pub use client::GeminiClient;
pub use planner::ItineraryPlanner;
