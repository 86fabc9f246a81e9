//! Body read error type.

use std::io;

/// Failure to read a response body while describing a failed exchange.
///
/// This is the rarer "could not even describe the failure" outcome: the
/// exchange itself failed, and buffering its body to build the diagnostic
/// message failed too. The underlying I/O error is chained as `source`.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Body read error: {} at line {} in {}", source, line, file)]
pub struct BodyReadError {
    /// The I/O error raised while reading the body.
    pub source: io::Error,
    /// Line number where the error was created.
    pub line: u32,
    /// File where the error was created.
    pub file: &'static str,
}

impl BodyReadError {
    /// Wrap an I/O error with automatic location tracking.
    #[track_caller]
    pub fn new(source: io::Error) -> Self {
        let location = std::panic::Location::caller();
        Self {
            source,
            line: location.line(),
            file: location.file(),
        }
    }
}
