//! Atomic attempts: run a parser, and undo it if it fails.

use ravel_stream::{Error, ParseResult, ParseStream, StreamError};
use tracing::trace;

/// Run `parser`, restoring the stream position if it fails.
///
/// On success the result is returned and the stream stays wherever `parser`
/// left it. On a [`ParseError`](ravel_stream::ParseError) the stream is moved
/// back to where it was before the call and the error is re-stamped with
/// that position, so a failure escaping the outermost attempt reports where
/// the attempt began.
///
/// Stream errors are returned as-is without touching the position. If the
/// backend refuses to return to the recorded position, that is reported as
/// [`StreamError::Restore`] rather than as a recoverable failure.
pub fn try_parse<S, R, F>(stream: &mut S, parser: F) -> ParseResult<R>
where
    S: ParseStream + ?Sized,
    F: FnOnce(&mut S) -> ParseResult<R>,
{
    let start = stream.pos();
    match parser(stream) {
        Err(Error::Parse(err)) => {
            trace!(start, failed_at = stream.pos(), "backtracking");
            rewind_to(stream, start)?;
            Err(err.at(start).into())
        }
        other => other,
    }
}

/// Run `parser` as an attempt, turning a recoverable failure into `None`.
pub fn optional<S, R, F>(stream: &mut S, parser: F) -> ParseResult<Option<R>>
where
    S: ParseStream + ?Sized,
    F: FnOnce(&mut S) -> ParseResult<R>,
{
    match try_parse(stream, parser) {
        Ok(value) => Ok(Some(value)),
        Err(Error::Parse(_)) => Ok(None),
        Err(fatal) => Err(fatal),
    }
}

/// Run `parser` and then return to the starting position, whatever happened.
///
/// Useful to decide between productions by what follows without consuming it.
pub fn look_ahead<S, R, F>(stream: &mut S, parser: F) -> ParseResult<R>
where
    S: ParseStream + ?Sized,
    F: FnOnce(&mut S) -> ParseResult<R>,
{
    let start = stream.pos();
    let result = try_parse(stream, parser)?;
    rewind_to(stream, start)?;
    Ok(result)
}

/// Move the stream to `target`, a position it has already visited.
///
/// Normally the attempt moved forward and this steps back. If the attempt
/// stepped back past its own start, the skipped symbols are consumed again.
pub(crate) fn rewind_to<S>(stream: &mut S, target: usize) -> ParseResult<()>
where
    S: ParseStream + ?Sized,
{
    let current = stream.pos();
    let restored = if current >= target {
        stream.step_back(current - target)
    } else {
        (current..target).try_for_each(|_| stream.get().map(drop))
    };
    restored.map_err(|err| match err.into_parse() {
        Ok(source) => StreamError::Restore { target, source }.into(),
        Err(fatal) => fatal,
    })
}
