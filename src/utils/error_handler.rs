// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    Json,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::{error, warn};

use crate::models::response::ErrorResponse;

/// Maps errors raised by the middleware stack to JSON error responses
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // 408 if the request took too long, directly or further down the chain
    if err.is::<Elapsed>() || find_cause::<Elapsed>(&*err).is_some() {
        warn!("Request timed out: {err}");
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse::new("Request timeout")),
        );
    }

    // Otherwise, 500
    error!("Unhandled internal error: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
}

/// Fallback for every path without a registered route
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
