// Error rendering: content negotiation, cause-chain payloads and the
// JSON / XML / HTML formatters behind the ErrorRenderer.

pub mod app_error;
pub mod formatters;
pub mod media_type;
pub mod payload;
pub mod renderer;

pub use app_error::AppError;
pub use media_type::{MediaType, UnsupportedMediaType, XmlFlavor};
pub use renderer::{ErrorRenderer, RenderedError};
