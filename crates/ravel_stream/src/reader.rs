//! Incremental backend over any [`std::io::Read`].
//!
//! Input is pulled in chunks of [`ReaderConfig::chunk_size`] bytes and kept
//! in a window that starts at absolute position `base`:
//!
//! ```text
//!  base                 pos                    base + window.len()
//!   │   consumed, kept   │   loaded, unread     │   not read yet
//!   ▼────────────────────▼──────────────────────▼─────────────────▶
//! ```
//!
//! # Invariants
//!
//! - `base <= pos <= base + window.len()`.
//! - Unless the reader is exhausted, at least one unread byte is loaded.
//!   This is what lets `eof()` and `peek()` stay pure queries: the only
//!   refill point is `get()`, right after the cursor reaches the end of the
//!   window.
//! - With `max_retained = Some(n)`, bytes older than the last `n` consumed
//!   are discarded at refill time. Stepping back into discarded input fails
//!   with a [`ParseError`].

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::stream::{back_from, get_past_end, peek_past_end};
use crate::{ParseError, ParseResult, ParseStream, ReaderConfig, StreamError};

/// Byte stream that reads its source incrementally.
#[derive(Debug)]
pub struct ReaderStream<R> {
    reader: R,
    config: ReaderConfig,
    /// Retained and loaded bytes; `window[0]` is at absolute position `base`.
    window: Vec<u8>,
    base: usize,
    pos: usize,
    exhausted: bool,
}

impl<R: Read> ReaderStream<R> {
    /// Wrap `reader` using [`ReaderConfig::default()`].
    pub fn new(reader: R) -> Result<Self, StreamError> {
        ReaderStream::with_config(reader, ReaderConfig::default())
    }

    /// Wrap `reader` with an explicit buffering policy.
    ///
    /// Loads the first chunk eagerly so that `peek()` works immediately.
    pub fn with_config(reader: R, config: ReaderConfig) -> Result<Self, StreamError> {
        config.validate()?;
        let mut window = Vec::new();
        window
            .try_reserve_exact(config.chunk_size)
            .map_err(|_| StreamError::InvalidConfig("chunk size cannot be allocated"))?;
        let mut stream = ReaderStream {
            reader,
            config,
            window,
            base: 0,
            pos: 0,
            exhausted: false,
        };
        stream.ensure_lookahead()?;
        Ok(stream)
    }

    /// The buffering policy in effect.
    pub fn config(&self) -> ReaderConfig {
        self.config
    }

    /// Earliest position `step_back` can still reach.
    pub fn window_start(&self) -> usize {
        self.base
    }

    /// Unwrap the underlying reader, discarding any buffered input.
    pub fn into_inner(self) -> R {
        self.reader
    }

    #[inline]
    fn window_end(&self) -> usize {
        self.base + self.window.len()
    }

    /// Refill if the cursor has caught up with the loaded input.
    fn ensure_lookahead(&mut self) -> Result<(), StreamError> {
        if self.pos == self.window_end() && !self.exhausted {
            self.refill()?;
        }
        Ok(())
    }

    fn refill(&mut self) -> Result<(), StreamError> {
        let start = self.window.len();
        self.window
            .try_reserve(self.config.chunk_size)
            .map_err(|err| StreamError::Read {
                position: self.base + start,
                source: io::Error::new(io::ErrorKind::OutOfMemory, err),
            })?;
        self.window.resize(start + self.config.chunk_size, 0);
        let read = loop {
            match self.reader.read(&mut self.window[start..]) {
                Ok(n) => break n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(source) => {
                    self.window.truncate(start);
                    return Err(StreamError::Read {
                        position: self.base + start,
                        source,
                    });
                }
            }
        };
        self.window.truncate(start + read);

        if read == 0 {
            self.exhausted = true;
            debug!(position = self.pos, "reader exhausted");
        } else {
            debug!(position = self.pos, bytes = read, "loaded chunk");
        }

        self.trim();
        Ok(())
    }

    /// Drop consumed bytes that fall outside the retention window.
    fn trim(&mut self) {
        let Some(limit) = self.config.max_retained else {
            return;
        };
        let consumed = self.pos - self.base;
        if consumed > limit {
            let discard = consumed - limit;
            self.window.drain(..discard);
            self.base += discard;
            debug!(window_start = self.base, discarded = discard, "trimmed window");
        }
    }
}

impl ReaderStream<File> {
    /// Open a file and read it incrementally.
    pub fn open(path: impl AsRef<Path>, config: ReaderConfig) -> Result<Self, StreamError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        ReaderStream::with_config(file, config)
    }
}

impl<R: Read> ParseStream for ReaderStream<R> {
    type Symbol = u8;

    #[inline]
    fn eof(&self) -> bool {
        self.pos >= self.window_end()
    }

    #[inline]
    fn peek(&self) -> ParseResult<u8> {
        self.window
            .get(self.pos - self.base)
            .copied()
            .ok_or_else(|| peek_past_end(self.pos))
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    fn get(&mut self) -> ParseResult<u8> {
        let byte = self
            .window
            .get(self.pos - self.base)
            .copied()
            .ok_or_else(|| get_past_end(self.pos))?;
        self.pos += 1;
        if let Err(err) = self.ensure_lookahead() {
            // Leave the cursor where the caller last saw it.
            self.pos -= 1;
            return Err(err.into());
        }
        Ok(byte)
    }

    fn step_back(&mut self, n: usize) -> ParseResult<()> {
        let target = back_from(self.pos, n)?;
        if target < self.base {
            return Err(ParseError::new(
                format!(
                    "stepping back {n} would leave the retained window (earliest position {})",
                    self.base
                ),
                self.pos,
            )
            .into());
        }
        self.pos = target;
        Ok(())
    }
}
