// Start of file: /src/core/logging.rs

use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::fmt::format::FmtSpan;

// Per-request lines are debug, so the default keeps the hot path quiet
const DEFAULT_FILTER: &str = "hello_server=info,axum=info";

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

// Initialize the tracing subscriber, honouring RUST_LOG when set
pub fn init_tracing() {
    fmt()
        .with_env_filter(default_filter())
        .with_span_events(FmtSpan::NONE)
        .init();
}


// End of file: /src/core/logging.rs
