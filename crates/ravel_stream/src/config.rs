//! Construction-time configuration for incremental backends.
//!
//! There is no process-wide default: callers hand a [`ReaderConfig`] to
//! [`ReaderStream::with_config`](crate::ReaderStream::with_config), or use
//! [`ReaderConfig::default()`] explicitly.

use crate::StreamError;

/// Bytes requested from the underlying reader per refill unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Largest `chunk_size` a [`ReaderConfig`] accepts (1 GiB).
pub const MAX_CHUNK_SIZE: usize = 1 << 30;

/// Buffering policy for a [`ReaderStream`](crate::ReaderStream).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Bytes requested from the reader on each refill, at most [`MAX_CHUNK_SIZE`].
    pub chunk_size: usize,
    /// How many already-consumed bytes to keep for stepping back.
    ///
    /// `None` keeps everything, so any step back that the position allows
    /// succeeds. `Some(n)` keeps at least the last `n` consumed bytes;
    /// stepping back further fails with a `ParseError`.
    pub max_retained: Option<usize>,
}

impl ReaderConfig {
    /// Default chunk size and unbounded retention.
    pub const fn new() -> Self {
        ReaderConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_retained: None,
        }
    }

    /// Set the number of bytes requested per refill.
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Bound the step-back window to at least `limit` consumed bytes.
    #[must_use]
    pub const fn with_max_retained(mut self, limit: usize) -> Self {
        self.max_retained = Some(limit);
        self
    }

    /// Keep every consumed byte.
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.max_retained = None;
        self
    }

    /// Reject settings no backend can honor.
    pub(crate) fn validate(&self) -> Result<(), StreamError> {
        if self.chunk_size == 0 {
            return Err(StreamError::InvalidConfig("chunk size must be non-zero"));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(StreamError::InvalidConfig(
                "chunk size exceeds MAX_CHUNK_SIZE",
            ));
        }
        if self.max_retained == Some(0) {
            return Err(StreamError::InvalidConfig(
                "retained window must allow at least one byte",
            ));
        }
        Ok(())
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig::new()
    }
}
