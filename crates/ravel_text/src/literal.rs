//! Literal matching and string-collecting scanners.

use ravel_parse::{drop_while, Error, ParseResult, ParseStream};

use crate::is_whitespace;

/// Match `literal` byte by byte.
///
/// On a mismatch this fails having consumed the matched prefix: a literal
/// that matches on 3 bytes but not the 4th leaves the stream 3 bytes further
/// on. Wrap it in `try_parse` (or use it inside `option`/`many`) when that
/// must not happen.
pub fn string<S>(stream: &mut S, literal: &str) -> ParseResult<String>
where
    S: ParseStream<Symbol = u8> + ?Sized,
{
    for &expected in literal.as_bytes() {
        match stream.peek() {
            Ok(found) if found == expected => {
                stream.get()?;
            }
            Ok(_) | Err(Error::Parse(_)) => {
                return Err(stream.error(&format!("could not match `{literal}`")));
            }
            Err(fatal) => return Err(fatal),
        }
    }
    Ok(literal.to_string())
}

/// [`ravel_parse::take_while`], collected into a `String`.
pub fn take_while<S, P>(stream: &mut S, predicate: P) -> ParseResult<String>
where
    S: ParseStream<Symbol = u8> + ?Sized,
    P: FnMut(&u8) -> bool,
{
    ravel_parse::take_while(stream, predicate).map(into_string)
}

/// [`ravel_parse::take_until`], collected into a `String`.
pub fn take_until<S, P>(stream: &mut S, predicate: P) -> ParseResult<String>
where
    S: ParseStream<Symbol = u8> + ?Sized,
    P: FnMut(&u8) -> bool,
{
    ravel_parse::take_until(stream, predicate).map(into_string)
}

/// Consume up to the next whitespace or end of input.
///
/// Fails, without consuming, if that would yield an empty string.
pub fn parse_string<S>(stream: &mut S) -> ParseResult<String>
where
    S: ParseStream<Symbol = u8> + ?Sized,
{
    let word = take_until(stream, is_whitespace)?;
    if word.is_empty() {
        return Err(stream.error("expected a non-whitespace string"));
    }
    Ok(word)
}

/// Skip all whitespace at the current position.
pub fn consume_whitespace<S>(stream: &mut S) -> ParseResult<()>
where
    S: ParseStream<Symbol = u8> + ?Sized,
{
    drop_while(stream, is_whitespace)
}

/// One `char` per byte.
fn into_string(bytes: Vec<u8>) -> String {
    bytes.into_iter().map(char::from).collect()
}
