//! Ordered alternatives.
//!
//! The first alternative that succeeds wins. This is an observable policy:
//! reordering the alternatives changes the result for ambiguous input.

use ravel_stream::{Error, ParseError, ParseResult, ParseStream};
use tracing::trace;

use crate::try_parse;

/// Try each alternative in order, returning the first success.
///
/// Each attempt is backtracking, so every alternative sees the input from
/// the same starting position. If all of them fail, the stream is left
/// where it started and a [`ParseError`] is returned.
///
/// All alternatives share one type. Mix different closures through
/// `&dyn Fn` or function pointers, or use the [`alt!`](crate::alt) macro.
///
/// ```text
/// let keywords: [fn(&mut MemoryStream<u8>) -> ParseResult<Keyword>; 2] = [parse_let, parse_var];
/// let keyword = option(&mut stream, &keywords)?;
/// ```
pub fn option<S, R, F>(stream: &mut S, alternatives: &[F]) -> ParseResult<R>
where
    S: ParseStream + ?Sized,
    F: Fn(&mut S) -> ParseResult<R>,
{
    let start = stream.pos();
    for (index, alternative) in alternatives.iter().enumerate() {
        match try_parse(stream, alternative) {
            Err(Error::Parse(_)) => trace!(index, start, "alternative rejected"),
            other => return other,
        }
    }
    Err(ParseError::new("no alternative matched", start).into())
}

/// Ordered alternatives over closures of different types.
///
/// Same semantics as [`option`]: first success wins, each attempt is
/// backtracking, and if every alternative fails the stream is left where it
/// started.
///
/// ```text
/// let value = alt!(&mut stream,
///     |s| parse_bool(s).map(Value::Bool),
///     |s| parse_int(s).map(Value::Int),
///     |s| parse_string(s).map(Value::Text),
/// )?;
/// ```
#[macro_export]
macro_rules! alt {
    ($stream:expr, $($alternative:expr),+ $(,)?) => {{
        let stream: &mut _ = $stream;
        let start = $crate::ParseStream::pos(&*stream);
        'alternatives: {
            $(
                match $crate::try_parse(&mut *stream, $alternative) {
                    Err($crate::Error::Parse(_)) => {}
                    other => break 'alternatives other,
                }
            )+
            Err($crate::Error::from($crate::ParseError::new(
                "no alternative matched",
                start,
            )))
        }
    }};
}

#[cfg(test)]
mod tests;
