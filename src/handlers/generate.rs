//! Itinerary generation handler
//!
//! Handles trip requests from the form client and runs the planning
//! pipeline against the Gemini provider

use crate::handlers::AppState;
use crate::models::trip::{Itinerary, TripRequest};
use crate::utils::error::AppResult;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

/// Handle itinerary generation requests
///
/// POST /generate
///
/// Returns 200 with the itinerary JSON, or 500 with the uniform error
/// body when any step of the pipeline fails.
pub async fn generate_itinerary(
    State(state): State<Arc<AppState>>,
    Json(trip_request): Json<TripRequest>,
) -> AppResult<Json<Itinerary>> {
    debug!("Received trip request for destination: {}", trip_request.destination);

    let itinerary = state.planner.generate(&trip_request).await?;

    debug!(
        "Itinerary generated: {} days, total INR {}",
        itinerary.itinerary.len(),
        itinerary.total_estimated_cost
    );

    Ok(Json(itinerary))
}
