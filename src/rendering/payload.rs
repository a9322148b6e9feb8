// Error payload: the title plus, when details are shown, the cause chain

use serde::Serialize;
use std::error::Error;

use crate::rendering::app_error::AppError;

/// Title used by every representation
pub const ERROR_TITLE: &str = "Application Error";

/// Kind reported for chain links that are not `AppError`s
const FOREIGN_KIND: &str = "Error";

/// One link of the cause chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub code: i64,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub trace: Vec<String>,
}

/// What a formatter renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub message: String,
    #[serde(rename = "exception", skip_serializing_if = "Option::is_none")]
    pub exception_chain: Option<Vec<ErrorEntry>>,
}

impl ErrorEntry {
    fn from_link(link: &(dyn Error + 'static)) -> Self {
        match link.downcast_ref::<AppError>() {
            Some(app) => Self {
                kind: app.kind().to_string(),
                code: app.code(),
                message: app.message().to_string(),
                file: app.location().file().to_string(),
                line: app.location().line(),
                trace: app
                    .backtrace()
                    .to_string()
                    .lines()
                    .map(str::to_string)
                    .collect(),
            },
            None => Self {
                kind: FOREIGN_KIND.to_string(),
                code: 0,
                message: link.to_string(),
                file: String::new(),
                line: 0,
                trace: Vec::new(),
            },
        }
    }

    pub fn trace_text(&self) -> String {
        self.trace.join("\n")
    }
}

impl ErrorPayload {
    /// Builds the payload for `error`. Without details only the title is
    /// kept; nothing from the error itself reaches the payload.
    pub fn new(error: &(dyn Error + 'static), display_details: bool) -> Self {
        Self {
            message: ERROR_TITLE.to_string(),
            exception_chain: display_details.then(|| cause_chain(error)),
        }
    }

    /// Chain entries, empty when details are hidden
    pub fn entries(&self) -> &[ErrorEntry] {
        self.exception_chain.as_deref().unwrap_or_default()
    }
}

/// Walks `source()` links from the outer error until none remain
pub fn cause_chain(error: &(dyn Error + 'static)) -> Vec<ErrorEntry> {
    std::iter::successors(Some(error), |&link| link.source())
        .map(ErrorEntry::from_link)
        .collect()
}
