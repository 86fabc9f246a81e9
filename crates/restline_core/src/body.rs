//! Response body streams.

use std::fmt;
use std::io::{self, Read};

use tracing::debug;

/// Payload of a completed exchange.
///
/// A body is either buffered in memory, in which case it can be read any
/// number of times, or streaming, in which case reading consumes it. Callers
/// that need repeatable access to a streaming body convert it with
/// [`Body::into_buffered`] first.
pub enum Body {
    /// Fully buffered bytes; repeatable.
    Buffered(Vec<u8>),
    /// Single-read stream; consumed by reading.
    Streaming(Box<dyn Read + Send>),
}

impl Body {
    /// Wrap in-memory bytes as a repeatable body.
    pub fn buffered(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Buffered(bytes.into())
    }

    /// Wrap a reader as a single-read streaming body.
    pub fn streaming(reader: impl Read + Send + 'static) -> Self {
        Self::Streaming(Box::new(reader))
    }

    /// True when the body can be read more than once.
    pub fn is_repeatable(&self) -> bool {
        matches!(self, Self::Buffered(_))
    }

    /// Drain the body into memory so it becomes repeatable.
    ///
    /// Identity for an already buffered body. A failure mid-read fails the
    /// whole conversion; no partially read body is ever returned.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the stream cannot be read to its
    /// end.
    pub fn into_buffered(self) -> io::Result<Self> {
        match self {
            Self::Buffered(bytes) => Ok(Self::Buffered(bytes)),
            Self::Streaming(mut reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                debug!(len = bytes.len(), "buffered streaming response body");
                Ok(Self::Buffered(bytes))
            }
        }
    }

    /// Buffered content, or `None` for a streaming body.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Buffered(bytes) => Some(bytes),
            Self::Streaming(_) => None,
        }
    }

    /// Buffered content decoded as text (lossy UTF-8), or `None` for a
    /// streaming body.
    pub fn text(&self) -> Option<String> {
        self.bytes()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffered(bytes) => f.debug_tuple("Buffered").field(&bytes.len()).finish(),
            Self::Streaming(_) => f.write_str("Streaming(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn text_is_lossy_for_invalid_utf8() {
        let body = Body::buffered(vec![0x7b, 0xff, 0x7d]);
        assert_eq!(body.text().unwrap(), "{\u{fffd}}");
    }

    #[test]
    fn streaming_bodies_expose_no_bytes() {
        let body = Body::streaming(Cursor::new(Vec::new()));
        assert!(body.bytes().is_none());
        assert!(body.text().is_none());
    }

    #[test]
    fn into_buffered_is_identity_for_buffered_bodies() {
        let body = Body::buffered("already here").into_buffered().unwrap();
        assert_eq!(body.bytes(), Some(&b"already here"[..]));
    }
}
