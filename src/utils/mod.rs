// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting HTTP helpers: the global error handler, the error
    * rendering middleware and the JSON envelope for successful responses.
*/

pub mod error_handler;
pub mod response_handler;

// End of file: /src/utils/mod.rs
