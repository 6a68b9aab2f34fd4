// Start of file: /src/core/mod.rs

/*
    * Process-level plumbing: tracing setup and the HTTP server lifecycle.
*/

pub mod logging;
pub mod server;

// End of file: /src/core/mod.rs
