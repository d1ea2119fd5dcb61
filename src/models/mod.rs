// Start of file: /src/models/mod.rs

/*
    * Payload types serialized into response bodies.
*/

pub mod response;

// End of file: /src/models/mod.rs
