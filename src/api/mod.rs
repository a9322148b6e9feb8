// Start of file: /src/api/mod.rs

/*
    * HTTP endpoints, grouped by feature. Each feature exposes a routes()
    * function and keeps its handlers next to it.
*/

pub mod diagnostics;

// End of file: /src/api/mod.rs
