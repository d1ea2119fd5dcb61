// Start of file: /src/core/mod.rs

/*
    * Process-level plumbing: tracing setup and server assembly.
*/

pub mod logging;
pub mod server;

// End of file: /src/core/mod.rs
