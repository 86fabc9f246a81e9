//! Status line of a completed HTTP exchange.

use std::fmt;

/// Protocol version, status code, and reason phrase of a response.
///
/// The `Display` form is the canonical status-line text used in diagnostics,
/// e.g. `HTTP/1.1 404 Not Found`. Formatting uses only the stored fields, so
/// the output is identical on every host locale.
///
/// # Examples
///
/// ```
/// use restline_core::StatusLine;
///
/// let status = StatusLine::new("HTTP/1.1", 404, "Not Found");
/// assert_eq!(status.to_string(), "HTTP/1.1 404 Not Found");
/// assert!(!status.is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusLine {
    protocol: String,
    code: u16,
    reason: String,
}

impl StatusLine {
    /// Create a status line from its three parts.
    pub fn new(protocol: impl Into<String>, code: u16, reason: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            code,
            reason: reason.into(),
        }
    }

    /// Protocol version, e.g. `HTTP/1.1`.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Numeric status code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Reason phrase, e.g. `Not Found`. May be empty for non-standard codes.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// True when the code signals success (below 300).
    pub fn is_success(&self) -> bool {
        self.code < 300
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.protocol, self.code)?;
        if !self.reason.is_empty() {
            write!(f, " {}", self.reason)?;
        }
        Ok(())
    }
}
