// Start of file: /src/api/mod.rs

/*
    * HTTP surface of the service. Each feature owns its routes, handler and service.
*/

pub mod ping;

// End of file: /src/api/mod.rs
