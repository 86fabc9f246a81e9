//! Failed-exchange error with repeatable-read diagnostics.

use std::error::Error;
use std::sync::Arc;

use restline_core::Response;
use tracing::debug;

use crate::BodyReadError;

/// Error raised when a server responds with a status code that indicates
/// failure. Holds the response that was returned.
///
/// The diagnostic message is computed exactly once, at construction time. A
/// non-repeatable response body is buffered first and the buffered copy is
/// installed back on the response, so the message and every later reader of
/// the held response observe the same bytes.
///
/// # Examples
///
/// ```
/// use restline_core::{Body, Response, StatusLine};
/// use restline_error::ExchangeError;
///
/// let response = Response::new(
///     "GET",
///     "localhost:9200",
///     "/index/_doc/1",
///     StatusLine::new("HTTP/1.1", 404, "Not Found"),
/// )
/// .with_body(Body::buffered("{\"error\":\"not_found\"}"));
///
/// let err = ExchangeError::from_response(response)?;
/// assert_eq!(
///     err.message(),
///     "method [GET], host [localhost:9200], URI [/index/_doc/1], \
///      status line [HTTP/1.1 404 Not Found]\n{\"error\":\"not_found\"}",
/// );
/// # Ok::<(), restline_error::BodyReadError>(())
/// ```
#[derive(Debug, derive_more::Display)]
#[display("{}", message)]
pub struct ExchangeError {
    message: String,
    response: Arc<Response>,
    cause: Option<Box<ExchangeError>>,
    line: u32,
    file: &'static str,
}

impl ExchangeError {
    /// Build an error describing `response`, which the caller has judged
    /// failed by its status.
    ///
    /// Takes the response by value: the buffering step mutates it, and
    /// ownership guarantees no other reader races that mutation. If the
    /// response carries a non-repeatable body, the body is buffered and the
    /// buffered copy installed back on the response before the message is
    /// built, so the body can still be read through [`ExchangeError::response`]
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`BodyReadError`] if reading the body fails. No error value is
    /// produced in that case; the partially read response is dropped.
    #[track_caller]
    pub fn from_response(mut response: Response) -> Result<Self, BodyReadError> {
        let message = build_message(&mut response)?;
        debug!(status = response.status(), "constructed exchange error");
        let location = std::panic::Location::caller();
        Ok(Self {
            message,
            response: Arc::new(response),
            cause: None,
            line: location.line(),
            file: location.file(),
        })
    }

    /// Re-raise this error with the current call-site as its origin.
    ///
    /// Used on synchronous call paths where the original error was built on a
    /// background worker: the message and held response carry over unchanged,
    /// and the prior error becomes this error's
    /// [`source`](std::error::Error::source), so the diagnostic trail keeps
    /// the original context while the location fields point at the caller.
    /// Performs no I/O and cannot fail.
    #[track_caller]
    #[must_use]
    pub fn rethrow(self) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: self.message.clone(),
            response: Arc::clone(&self.response),
            line: location.line(),
            file: location.file(),
            cause: Some(Box::new(self)),
        }
    }

    /// The diagnostic message, in the fixed layout
    /// `method [M], host [H], URI [U], status line [S]`, with the body text
    /// on a following line when the response has a body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The response that caused this error.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Shared handle to the held response, for callers that keep it past the
    /// error's lifetime. Clones of this handle point at the same response.
    pub fn shared_response(&self) -> Arc<Response> {
        Arc::clone(&self.response)
    }

    /// The prior error this one was re-raised from, if any.
    pub fn cause(&self) -> Option<&ExchangeError> {
        self.cause.as_deref()
    }

    /// Line where this error was constructed.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where this error was constructed.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

impl Error for ExchangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}

fn build_message(response: &mut Response) -> Result<String, BodyReadError> {
    let mut message = format!(
        "method [{}], host [{}], URI [{}], status line [{}]",
        response.method(),
        response.host(),
        response.request_uri(),
        response.status_line(),
    );

    if let Some(body) = response.take_body() {
        // Closure, not a fn reference: keeps the tracked caller location here.
        let buffered = body.into_buffered().map_err(|e| BodyReadError::new(e))?;
        if let Some(text) = buffered.text() {
            message.push('\n');
            message.push_str(&text);
        }
        response.replace_body(buffered);
    }

    Ok(message)
}
