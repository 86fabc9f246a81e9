//! The result of one completed HTTP exchange.

use http::HeaderMap;

use crate::{Body, StatusLine};

/// A completed HTTP exchange: the request method, target host and URI that
/// produced it, the status line that came back, response headers, and an
/// optional body.
///
/// The body may be streaming (single-read). [`Response::take_body`] and
/// [`Response::replace_body`] exist so a caller can lift the body out,
/// buffer it with [`Body::into_buffered`], and install the repeatable copy
/// back on the same response.
///
/// # Examples
///
/// ```
/// use restline_core::{Body, Response, StatusLine};
///
/// let response = Response::new(
///     "GET",
///     "localhost:9200",
///     "/index/_doc/1",
///     StatusLine::new("HTTP/1.1", 404, "Not Found"),
/// )
/// .with_body(Body::buffered("{\"error\":\"not_found\"}"));
///
/// assert_eq!(response.status(), 404);
/// assert!(!response.is_success());
/// assert!(response.body().is_some());
/// ```
#[derive(Debug)]
pub struct Response {
    method: String,
    host: String,
    uri: String,
    status_line: StatusLine,
    headers: HeaderMap,
    body: Option<Body>,
}

impl Response {
    /// Create a response with no headers and no body.
    pub fn new(
        method: impl Into<String>,
        host: impl Into<String>,
        uri: impl Into<String>,
        status_line: StatusLine,
    ) -> Self {
        Self {
            method: method.into(),
            host: host.into(),
            uri: uri.into(),
            status_line,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Attach response headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Attach a response body.
    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Request method, e.g. `GET`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Target host the request was sent to, e.g. `localhost:9200`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Request URI, e.g. `/index/_doc/1`.
    pub fn request_uri(&self) -> &str {
        &self.uri
    }

    /// Status line of the response.
    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    /// Numeric status code, shortcut for `status_line().code()`.
    pub fn status(&self) -> u16 {
        self.status_line.code()
    }

    /// True when the status code signals success.
    pub fn is_success(&self) -> bool {
        self.status_line.is_success()
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of the named header, if present and valid text.
    /// Header-name lookup is case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Response body, if any.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Remove and return the body, leaving the response without one.
    pub fn take_body(&mut self) -> Option<Body> {
        self.body.take()
    }

    /// Install a new body on this response.
    ///
    /// This is the narrow mutation used for buffering: after lifting a
    /// streaming body out with [`Response::take_body`] and converting it
    /// with [`Body::into_buffered`], the repeatable copy goes back here so
    /// every later reader observes the same bytes.
    pub fn replace_body(&mut self, body: Body) {
        self.body = Some(body);
    }
}
