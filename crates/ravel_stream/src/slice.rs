//! Borrowed in-memory backend.

use crate::stream::{back_from, get_slice, peek_slice};
use crate::{ParseResult, ParseStream};

/// Stream over a borrowed slice.
///
/// The stream is [`Copy`]: copying it yields a second, independent cursor
/// over the same symbols.
#[derive(Debug)]
pub struct SliceStream<'a, T> {
    data: &'a [T],
    pos: usize,
}

// Manual impls: a derive would demand `T: Copy` for a type that only holds `&[T]`.
impl<T> Clone for SliceStream<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceStream<'_, T> {}

impl<'a, T> SliceStream<'a, T> {
    /// Create a stream positioned at the first symbol of `data`.
    pub fn new(data: &'a [T]) -> Self {
        SliceStream { data, pos: 0 }
    }

    /// The symbols not yet consumed.
    pub fn remaining(&self) -> &'a [T] {
        &self.data[self.pos..]
    }

    /// The full underlying sequence.
    pub fn source(&self) -> &'a [T] {
        self.data
    }
}

impl<'a, T> From<&'a [T]> for SliceStream<'a, T> {
    fn from(data: &'a [T]) -> Self {
        SliceStream::new(data)
    }
}

impl<'a> From<&'a str> for SliceStream<'a, u8> {
    fn from(text: &'a str) -> Self {
        SliceStream::new(text.as_bytes())
    }
}

impl<T: Clone> ParseStream for SliceStream<'_, T> {
    type Symbol = T;

    #[inline]
    fn eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    #[inline]
    fn peek(&self) -> ParseResult<T> {
        peek_slice(self.data, self.pos)
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    fn get(&mut self) -> ParseResult<T> {
        get_slice(self.data, &mut self.pos)
    }

    fn step_back(&mut self, n: usize) -> ParseResult<()> {
        self.pos = back_from(self.pos, n)?;
        Ok(())
    }
}
