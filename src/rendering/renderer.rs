// Renders unhandled errors as negotiated 500 responses

use axum::{
    body::Body,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
};
use std::error::Error;
use tracing::error;

use crate::rendering::{
    formatters::{render_html, render_json, render_xml},
    media_type::{negotiate, MediaType, UnsupportedMediaType},
    payload::{cause_chain, ErrorEntry, ErrorPayload, ERROR_TITLE},
};

/// Stateless renderer; the only setting is whether error internals
/// (messages, files, lines, traces) are exposed to the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorRenderer {
    display_error_details: bool,
}

/// A rendered 500 response, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedError {
    pub status: StatusCode,
    pub content_type: MediaType,
    pub body: String,
}

impl ErrorRenderer {
    pub const fn new(display_error_details: bool) -> Self {
        Self { display_error_details }
    }

    pub const fn display_error_details(&self) -> bool {
        self.display_error_details
    }

    /// Negotiates a representation from `accept` and formats `error` in it.
    /// Fails only when the header names no supported media type.
    pub fn render(
        &self,
        accept: &str,
        error: &(dyn Error + 'static),
    ) -> Result<RenderedError, UnsupportedMediaType> {
        let content_type: MediaType = negotiate(accept)?;

        let payload: ErrorPayload = ErrorPayload::new(error, self.display_error_details);
        let body: String = match content_type {
            MediaType::Json => render_json(&payload),
            MediaType::Xml(_) => render_xml(&payload),
            MediaType::Html => render_html(&payload),
        };

        Ok(RenderedError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            content_type,
            body,
        })
    }

    /// Log report for an error whose details are kept from the client;
    /// `None` when the client sees them in the body anyway.
    pub fn hidden_report(&self, error: &(dyn Error + 'static)) -> Option<String> {
        (!self.display_error_details).then(|| hidden_error_report(error))
    }

    /// Renders into an existing response: status, `Content-Type` and body
    /// are replaced. On failure the response is left as it was. Hidden
    /// details are written to the log instead.
    pub fn write_response(
        &self,
        accept: &str,
        response: &mut Response<Body>,
        error: &(dyn Error + 'static),
    ) -> Result<(), UnsupportedMediaType> {
        let rendered: RenderedError = self.render(accept, error)?;

        if let Some(report) = self.hidden_report(error) {
            error!("{report}");
        }

        *response.status_mut() = rendered.status;
        response.headers_mut().remove(CONTENT_LENGTH);
        response
            .headers_mut()
            .insert(CONTENT_TYPE, rendered.content_type.header_value());
        *response.body_mut() = Body::from(rendered.body);

        Ok(())
    }
}

impl IntoResponse for RenderedError {
    fn into_response(self) -> Response {
        (
            self.status,
            [(CONTENT_TYPE, self.content_type.header_value())],
            self.body,
        )
            .into_response()
    }
}

fn hidden_error_report(error: &(dyn Error + 'static)) -> String {
    let chain: Vec<ErrorEntry> = cause_chain(error);
    let mut report: String = format!("{ERROR_TITLE}:");

    for (depth, entry) in chain.iter().enumerate() {
        if depth > 0 {
            report.push_str("\nPrevious error:");
        }
        report.push_str(&format!("\nType: {}", entry.kind));
        if entry.code != 0 {
            report.push_str(&format!("\nCode: {}", entry.code));
        }
        report.push_str(&format!("\nMessage: {}", entry.message));
        if !entry.file.is_empty() {
            report.push_str(&format!("\nFile: {}\nLine: {}", entry.file, entry.line));
        }
        if !entry.trace.is_empty() {
            report.push_str(&format!("\nTrace: {}", entry.trace_text()));
        }
    }

    report.push_str("\nView in rendered output by enabling the \"DISPLAY_ERROR_DETAILS\" setting.");
    report
}
