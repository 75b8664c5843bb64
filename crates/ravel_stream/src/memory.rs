//! Owned in-memory backend.

use std::sync::Arc;

use crate::stream::{back_from, get_slice, peek_slice};
use crate::{ParseResult, ParseStream};

/// Stream over an owned, shareable sequence.
///
/// Symbols live behind an `Arc<[T]>`. Cloning the stream shares the data
/// and copies the cursor, so each clone advances independently.
#[derive(Clone, Debug)]
pub struct MemoryStream<T> {
    data: Arc<[T]>,
    pos: usize,
}

impl<T> MemoryStream<T> {
    /// Create a stream positioned at the first symbol.
    pub fn new(data: impl Into<Arc<[T]>>) -> Self {
        MemoryStream {
            data: data.into(),
            pos: 0,
        }
    }

    /// The symbols not yet consumed.
    pub fn remaining(&self) -> &[T] {
        &self.data[self.pos..]
    }

    /// The full underlying sequence.
    pub fn source(&self) -> &[T] {
        &self.data
    }

    /// Total number of symbols.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying sequence has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<&str> for MemoryStream<u8> {
    fn from(text: &str) -> Self {
        MemoryStream::new(text.as_bytes())
    }
}

impl From<String> for MemoryStream<u8> {
    fn from(text: String) -> Self {
        MemoryStream::new(text.into_bytes())
    }
}

impl<T> From<Vec<T>> for MemoryStream<T> {
    fn from(data: Vec<T>) -> Self {
        MemoryStream::new(data)
    }
}

impl<T: Clone> From<&[T]> for MemoryStream<T> {
    fn from(data: &[T]) -> Self {
        MemoryStream::new(data)
    }
}

impl<T: Clone> ParseStream for MemoryStream<T> {
    type Symbol = T;

    #[inline]
    fn eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    #[inline]
    fn peek(&self) -> ParseResult<T> {
        peek_slice(&self.data, self.pos)
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    fn get(&mut self) -> ParseResult<T> {
        get_slice(&self.data, &mut self.pos)
    }

    fn step_back(&mut self, n: usize) -> ParseResult<()> {
        self.pos = back_from(self.pos, n)?;
        Ok(())
    }
}
