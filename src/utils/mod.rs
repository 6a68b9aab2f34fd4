// Start of file: /src/utils/mod.rs

/*
    * Re-exports for all utility modules like error handling,
    * the error response format and request logging.
*/

pub mod error_handler;
pub mod request_logger;
pub mod response_format;

// End of file: /src/utils/mod.rs
