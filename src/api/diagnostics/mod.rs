// Diagnostic endpoints for checking health and exercising the error pipeline

pub mod handler;
pub mod routes;
