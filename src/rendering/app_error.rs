// The service's own error value, as it reaches the renderer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{
    backtrace::Backtrace,
    borrow::Cow,
    error::Error,
    fmt,
    panic::Location,
    sync::Arc,
};

type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// An unhandled failure, with the diagnostics the renderer can expose:
/// the kind of error, a numeric code, where it was raised and a backtrace.
pub struct AppError {
    kind: Cow<'static, str>,
    code: i64,
    message: String,
    location: &'static Location<'static>,
    backtrace: Backtrace,
    source: Option<BoxedSource>,
    wrapped: Option<BoxedSource>,
}

impl AppError {
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: Cow::Borrowed("AppError"),
            code: 0,
            message: message.into(),
            location: Location::caller(),
            backtrace: Backtrace::capture(),
            source: None,
            wrapped: None,
        }
    }

    /// Wraps a foreign error, keeping its type name and message. The wrapped
    /// error's own causes become this error's causes.
    #[track_caller]
    pub fn wrap<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: Cow::Borrowed(std::any::type_name::<E>()),
            code: 0,
            message: err.to_string(),
            location: Location::caller(),
            backtrace: Backtrace::capture(),
            source: None,
            wrapped: Some(Box::new(err)),
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<Cow<'static, str>>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn caused_by<E>(mut self, cause: E) -> Self
    where
        E: Into<BoxedSource>,
    {
        self.source = Some(cause.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("code", &self.code)
            .field("message", &self.message)
            .field("location", &self.location)
            .field("source", &self.source)
            .finish()
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match (&self.source, &self.wrapped) {
            (Some(source), _) => Some(&**source as &(dyn Error + 'static)),
            (None, Some(wrapped)) => wrapped.source(),
            (None, None) => None,
        }
    }
}

/// Handler failures leave the body empty and stash the error in the response
/// extensions; the rendering middleware turns it into the negotiated body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response: Response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(Arc::new(self));
        response
    }
}
