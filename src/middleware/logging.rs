//! Logging middleware
//!
//! Records HTTP request and response information

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Request logging middleware
///
/// Records method, path, status, and duration for each HTTP request,
/// tagged with a per-request id
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();

    info!(request_id = %request_id, "Request started: {} {}", method, uri.path());

    let response = next.run(request).await;

    let duration = start_time.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            request_id = %request_id,
            "Server error: {} - Duration: {:.2}ms",
            status,
            duration.as_secs_f64() * 1000.0
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            "Client error: {} - Duration: {:.2}ms",
            status,
            duration.as_secs_f64() * 1000.0
        );
    } else {
        info!(
            request_id = %request_id,
            "Request completed: {} - Duration: {:.2}ms",
            status,
            duration.as_secs_f64() * 1000.0
        );
    }

    // Provider calls dominate latency; anything past 30s deserves a note
    if duration.as_secs() > 30 {
        warn!(
            request_id = %request_id,
            "Slow request detected: {} {} - Duration: {:.2}s",
            method,
            uri.path(),
            duration.as_secs_f64()
        );
    }

    response
}
