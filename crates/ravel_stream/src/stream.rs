//! The stream capability set.

use crate::{Error, ParseError, ParseResult};

/// A read cursor over an immutable sequence of symbols.
///
/// # Contract
///
/// - `pos()` is the number of symbols consumed since the logical start.
///   Symbols `[0, pos)` are consumed and `[pos, end)` remain.
/// - `eof()`, `peek()` and `pos()` never move the cursor. Repeated `peek()`
///   calls with no consuming call in between return the same symbol.
/// - `get()` fails exactly where `peek()` fails, and otherwise advances
///   `pos()` by one.
/// - `step_back(n)` fails when `n > pos()`; `step_back(0)` is a no-op.
///   A backend that cannot retain unbounded history may also refuse to step
///   back past its retained window, with a [`ParseError`].
///
/// Every combinator is written against these operations alone, so any
/// backend satisfying them can be used anywhere.
pub trait ParseStream {
    /// One element of the input.
    type Symbol: Clone;

    /// Returns `true` if no symbol remains at the current position.
    fn eof(&self) -> bool;

    /// Returns the symbol at the current position without consuming it.
    fn peek(&self) -> ParseResult<Self::Symbol>;

    /// Current position, in symbols consumed.
    fn pos(&self) -> usize;

    /// Returns the symbol at the current position and advances past it.
    fn get(&mut self) -> ParseResult<Self::Symbol>;

    /// Moves the cursor back by `n` symbols.
    fn step_back(&mut self, n: usize) -> ParseResult<()>;

    /// Moves the cursor back by one symbol.
    fn unget(&mut self) -> ParseResult<()> {
        self.step_back(1)
    }

    /// Build a [`ParseError`] stamped with the current position.
    ///
    /// ```text
    /// if !is_digit(&stream.peek()?) {
    ///     return Err(stream.error("expected digit"));
    /// }
    /// ```
    fn error(&self, message: &str) -> Error {
        ParseError::new(message, self.pos()).into()
    }
}

/// Error for `peek()` at end of input.
pub(crate) fn peek_past_end(pos: usize) -> Error {
    ParseError::new("cannot peek after end of input", pos).into()
}

/// Error for `get()` at end of input.
pub(crate) fn get_past_end(pos: usize) -> Error {
    ParseError::new("cannot get after end of input", pos).into()
}

/// Compute the position `n` symbols before `pos`, failing if it would be negative.
pub(crate) fn back_from(pos: usize, n: usize) -> ParseResult<usize> {
    pos.checked_sub(n).ok_or_else(|| {
        ParseError::new(
            format!("stepping back {n} would move before the start of input"),
            pos,
        )
        .into()
    })
}

/// `peek()` over a fully loaded sequence.
pub(crate) fn peek_slice<T: Clone>(data: &[T], pos: usize) -> ParseResult<T> {
    data.get(pos).cloned().ok_or_else(|| peek_past_end(pos))
}

/// `get()` over a fully loaded sequence, advancing `pos` on success.
pub(crate) fn get_slice<T: Clone>(data: &[T], pos: &mut usize) -> ParseResult<T> {
    let symbol = data.get(*pos).cloned().ok_or_else(|| get_past_end(*pos))?;
    *pos += 1;
    Ok(symbol)
}
