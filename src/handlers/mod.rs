//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod generate;
pub mod health;

use crate::config::Settings;
use crate::middleware::logging::request_logging_middleware;
use crate::services::ItineraryPlanner;
use anyhow::Result;
use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub planner: ItineraryPlanner,
}

/// Create application router
pub async fn create_router(settings: Settings) -> Result<Router> {
    // Create itinerary planner (owns the Gemini client)
    let planner = ItineraryPlanner::new(settings.clone())?;

    // Create application state
    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        planner,
    });

    // Create routes; the form client assets are served from the root path
    let router = Router::new()
        .route("/generate", post(generate::generate_itinerary))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .fallback_service(ServeDir::new("public"))
        .layer(axum::middleware::from_fn(request_logging_middleware))
        .with_state(app_state)
        .layer(RequestBodyLimitLayer::new(settings.request.max_request_size))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
