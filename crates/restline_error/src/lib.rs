//! Error types for the restline REST client library.
//!
//! Errors here capture their construction site automatically via
//! `#[track_caller]`, so a re-raised error points at the synchronous caller
//! rather than the worker that first built it.
//!
//! # Examples
//!
//! ```
//! use restline_core::{Response, StatusLine};
//! use restline_error::ExchangeError;
//!
//! let response = Response::new(
//!     "GET",
//!     "localhost:9200",
//!     "/index/_doc/1",
//!     StatusLine::new("HTTP/1.1", 404, "Not Found"),
//! );
//! let err = ExchangeError::from_response(response).expect("no body to read");
//! assert!(err.message().starts_with("method [GET]"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod body_read;
mod exchange;

pub use body_read::BodyReadError;
pub use exchange::ExchangeError;
