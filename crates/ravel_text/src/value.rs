//! Boolean and numeric value parsers.
//!
//! Each parser here is all-or-nothing: on failure the stream is back where
//! it started.

use ravel_parse::{
    alt, many_one, one_of, optional, satisfy, try_parse, Error, ParseError, ParseResult,
    ParseStream,
};

use crate::{is_number, string};

/// `true` or `false`.
pub fn parse_bool<S>(stream: &mut S) -> ParseResult<bool>
where
    S: ParseStream<Symbol = u8> + ?Sized,
{
    alt!(
        stream,
        |s| string(s, "true").map(|_| true),
        |s| string(s, "false").map(|_| false),
    )
    .map_err(|err| match err {
        Error::Parse(err) => ParseError::new("expected `true` or `false`", err.position()).into(),
        fatal @ Error::Stream(_) => fatal,
    })
}

/// A single decimal digit, as its numeric value.
pub fn parse_digit<S>(stream: &mut S) -> ParseResult<u32>
where
    S: ParseStream<Symbol = u8> + ?Sized,
{
    let digit = satisfy(stream, is_number)?;
    Ok(u32::from(digit - b'0'))
}

/// An optionally negative decimal integer.
///
/// A literal that does not fit in an `i64` is a parse failure.
pub fn parse_int<S>(stream: &mut S) -> ParseResult<i64>
where
    S: ParseStream<Symbol = u8> + ?Sized,
{
    try_parse(stream, |s| {
        let start = s.pos();
        let negative = sign(s)?;
        let digits = many_one(s, parse_digit)?;
        digits
            .iter()
            .try_fold(0i64, |acc, &digit| {
                let shifted = acc.checked_mul(10)?;
                if negative {
                    shifted.checked_sub(i64::from(digit))
                } else {
                    shifted.checked_add(i64::from(digit))
                }
            })
            .ok_or_else(|| ParseError::new("integer literal out of range", start).into())
    })
}

/// An optionally negative decimal number with an optional fractional part.
///
/// `-12.5`, `3` and `0.25` are accepted. A `.` that is not followed by a
/// digit is not part of the number and stays in the stream.
pub fn parse_float<S>(stream: &mut S) -> ParseResult<f64>
where
    S: ParseStream<Symbol = u8> + ?Sized,
{
    try_parse(stream, |s| {
        let start = s.pos();
        let mut literal = String::new();
        if sign(s)? {
            literal.push('-');
        }
        literal.extend(many_one(s, |s| satisfy(s, is_number))?.into_iter().map(char::from));

        let fraction = optional(s, |s| {
            one_of(s, ".")?;
            many_one(s, |s| satisfy(s, is_number))
        })?;
        if let Some(fraction) = fraction {
            literal.push('.');
            literal.extend(fraction.into_iter().map(char::from));
        }

        literal
            .parse()
            .map_err(|_| ParseError::new(format!("malformed number `{literal}`"), start).into())
    })
}

/// Consume a leading `-`, reporting whether there was one.
fn sign<S>(stream: &mut S) -> ParseResult<bool>
where
    S: ParseStream<Symbol = u8> + ?Sized,
{
    Ok(optional(stream, |s| one_of(s, "-"))?.is_some())
}
