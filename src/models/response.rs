// Start of file: /src/models/response.rs

use serde::Serialize;

pub const HELLO_MESSAGE: &str = "Hello, world!";

/// Body of `GET /hello`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self { message: HELLO_MESSAGE }
    }
}

/// Body of every error response: `{"error": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}


// End of file: /src/models/response.rs
