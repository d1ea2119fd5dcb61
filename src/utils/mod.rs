// Start of file: /src/utils/mod.rs

/*
    * Middleware and fallbacks shared by every route: error mapping,
    * the 404 fallback and request logging.
*/

pub mod error_handler;
pub mod request_logger;

// End of file: /src/utils/mod.rs
