//! Core exchange data types for the restline REST client library.
//!
//! This crate models the result of one completed HTTP exchange: the request
//! line that produced it, the status line that came back, response headers,
//! and a body that is either buffered (repeatable) or streaming (single-read).
//! It performs no transport of its own.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod body;
mod response;
mod status;
mod telemetry;

pub use body::Body;
pub use response::Response;
pub use status::StatusLine;
pub use telemetry::init_logging;
