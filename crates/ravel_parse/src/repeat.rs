//! Unbounded repetition.
//!
//! Each invocation of the repeated parser is an attempt in the
//! [`try_parse`](crate::try_parse) sense. Whatever the final, failing
//! invocation consumed is undone, so the stream always ends up right after
//! the last successful one.
//!
//! A parser that succeeds without consuming and never fails will repeat
//! forever; callers must make sure their parsers eventually fail or reach
//! end of input.

use ravel_stream::{ParseError, ParseResult, ParseStream};
use tracing::trace;

use crate::optional;

/// Apply `parser` until it fails, collecting the results in order.
///
/// Never fails with a [`ParseError`] itself: if the very first attempt
/// fails, the result is empty and the stream has not moved.
pub fn many<S, R, F>(stream: &mut S, mut parser: F) -> ParseResult<Vec<R>>
where
    S: ParseStream + ?Sized,
    F: FnMut(&mut S) -> ParseResult<R>,
{
    let mut results = Vec::new();
    while let Some(value) = optional(stream, &mut parser)? {
        results.push(value);
    }
    trace!(count = results.len(), position = stream.pos(), "repetition stopped");
    Ok(results)
}

/// Like [`many`], but at least one application must succeed.
///
/// Fails with "no parses succeeded" exactly when [`many`] would return an
/// empty list, and in that case the stream has not moved.
pub fn many_one<S, R, F>(stream: &mut S, parser: F) -> ParseResult<Vec<R>>
where
    S: ParseStream + ?Sized,
    F: FnMut(&mut S) -> ParseResult<R>,
{
    let start = stream.pos();
    let results = many(stream, parser)?;
    if results.is_empty() {
        return Err(ParseError::new("no parses succeeded", start).into());
    }
    Ok(results)
}

/// Zero or more `item`s separated by `separator`.
///
/// A separator is only consumed together with the item that follows it, so
/// a trailing separator is left in the stream.
pub fn sep_by<S, R, T, F, G>(stream: &mut S, mut item: F, mut separator: G) -> ParseResult<Vec<R>>
where
    S: ParseStream + ?Sized,
    F: FnMut(&mut S) -> ParseResult<R>,
    G: FnMut(&mut S) -> ParseResult<T>,
{
    let mut results = Vec::new();
    let Some(first) = optional(stream, &mut item)? else {
        return Ok(results);
    };
    results.push(first);
    while let Some(next) = optional(stream, |s: &mut S| {
        separator(s)?;
        item(s)
    })? {
        results.push(next);
    }
    Ok(results)
}

#[cfg(test)]
mod tests;
