// Content negotiation for error responses

use axum::http::{header::ACCEPT, HeaderMap, HeaderValue};
use std::fmt;

/// Representations an error body can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Json,
    Xml(XmlFlavor),
    Html,
}

/// Which XML media type the client asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlFlavor {
    Application,
    Text,
}

/// Raised when the Accept header names none of the supported families
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported media type: no renderer for Accept header {accept:?}")]
pub struct UnsupportedMediaType {
    pub accept: String,
}

impl MediaType {
    /// Canonical `Content-Type` value for this representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::Xml(XmlFlavor::Application) => "application/xml",
            MediaType::Xml(XmlFlavor::Text) => "text/xml",
            MediaType::Html => "text/html",
        }
    }

    pub fn header_value(&self) -> HeaderValue {
        HeaderValue::from_static(self.as_str())
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the representation for an Accept header.
///
/// The whole header is scanned once per family, in priority order: JSON
/// (`/json` or `+json`), then XML (`/xml` or `+xml`), then HTML (`text/html`,
/// `text/*` or `*/*`). Parameters such as `;q=0.8` are ignored. A header that
/// matches none of them is an error; there is no fallback representation.
pub fn negotiate(accept: &str) -> Result<MediaType, UnsupportedMediaType> {
    let ranges: Vec<String> = accept
        .split(',')
        .map(|range| {
            range
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
        .filter(|range| !range.is_empty())
        .collect();

    let any = |pred: fn(&str) -> bool| ranges.iter().any(|range| pred(range));

    if any(|r| r.contains("/json") || r.contains("+json")) {
        return Ok(MediaType::Json);
    }

    if any(|r| r.contains("/xml") || r.contains("+xml")) {
        let flavor: XmlFlavor = if any(|r| r == "text/xml") {
            XmlFlavor::Text
        } else {
            XmlFlavor::Application
        };
        return Ok(MediaType::Xml(flavor));
    }

    if any(|r| r.starts_with("text/html") || r == "text/*" || r == "*/*") {
        return Ok(MediaType::Html);
    }

    Err(UnsupportedMediaType {
        accept: accept.to_string(),
    })
}

/// Reads the Accept header off a request; a missing or non-visible-ASCII
/// header is treated as empty.
pub fn accept_header(headers: &HeaderMap) -> String {
    headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
