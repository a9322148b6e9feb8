// Library root for the Axum error rendering service

pub mod api;
pub mod config;
pub mod core;
pub mod rendering;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::rendering::{AppError, ErrorRenderer, MediaType, RenderedError, UnsupportedMediaType};
