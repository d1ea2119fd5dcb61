// Start of file: /src/utils/request_logger.rs

use std::{convert::Infallible, time::{Duration, Instant}};
use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    middleware::Next,
};
use tracing::{debug, warn};

/// Logs method, path, status and latency. Successful requests log at debug
pub async fn log_request(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let start: Instant = Instant::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let response: Response<Body> = next.run(req).await;

    let status: StatusCode = response.status();
    let elapsed: Duration = start.elapsed();

    if status.is_client_error() || status.is_server_error() {
        warn!(%method, %path, status = status.as_u16(), ?elapsed, "Request failed");
    } else {
        debug!(%method, %path, status = status.as_u16(), ?elapsed, "Request completed");
    }

    Ok(response)
}

// End of file: /src/utils/request_logger.rs
