// Start of file: /src/api/hello/handler.rs

use axum::{extract::State, Json};
use tracing::instrument;

use crate::config::state::AppState;
use crate::models::response::HelloResponse;

/// Returns the fixed `{"message": "Hello, world!"}` payload
#[instrument(skip(state), fields(environment = %state.environment.environment))]
pub async fn hello_handler(State(state): State<AppState>) -> Json<HelloResponse> {
    Json(HelloResponse::default())
}

// End of file: /src/api/hello/handler.rs
