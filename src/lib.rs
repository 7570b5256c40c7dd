//! Trip Planner Library
//!
//! Turns trip preferences into AI-generated day-by-day itineraries
//! via the Gemini generateContent API

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, AppState};
pub use models::trip::{Itinerary, TripRequest};
pub use services::{GeminiClient, ItineraryPlanner};
pub use utils::error::{AppError, AppResult, GENERATION_FAILED_MESSAGE};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
