// JSON envelope for successful handler responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

/// Standard JSON response format for non-error endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseFormat {
    pub status: String,          // HTTP status text (e.g. "OK")
    pub code: u16,               // HTTP status code
    pub data: Value,             // Response payload
    pub messages: Vec<String>,   // Informational messages
    pub date: String,            // ISO timestamp
}

/// Convenience struct for building responses in handlers
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub data: Value,
    pub messages: Vec<String>,
}

impl HandlerResponse {
    /// Creates a new response with specified status code
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            data: Value::Null,
            messages: Vec::new(),
        }
    }

    /// Adds JSON data payload to the response
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Adds an informational message to the response
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    fn into_format(self) -> ResponseFormat {
        let status: String = self
            .status_code
            .canonical_reason()
            .unwrap_or("UNKNOWN STATUS")
            .to_uppercase()
            .replace(' ', "_");

        ResponseFormat {
            status,
            code: self.status_code.as_u16(),
            data: self.data,
            messages: self.messages,
            date: Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status_code: StatusCode = self.status_code;
        let wrapped: ResponseFormat = self.into_format();

        match serde_json::to_string_pretty(&wrapped) {
            Ok(spaced_json) => debug!("\nFinal response:\n{}", spaced_json),
            Err(err) => error!("Failed to format response JSON: {:?}", err),
        }

        (status_code, Json(wrapped)).into_response()
    }
}
