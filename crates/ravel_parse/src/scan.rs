//! Predicate-driven scanning.
//!
//! All four scanners stop at the first symbol that ends the run, or at end
//! of input, and leave the stream positioned right after the last symbol
//! they consumed. Reaching end of input is not a failure.

use ravel_stream::{ParseResult, ParseStream};

/// Consume symbols while `predicate` holds, returning them in order.
///
/// Over in-memory backends this never fails; the `Result` only carries
/// backend I/O failures.
pub fn take_while<S, P>(stream: &mut S, predicate: P) -> ParseResult<Vec<S::Symbol>>
where
    S: ParseStream + ?Sized,
    P: FnMut(&S::Symbol) -> bool,
{
    let mut taken = Vec::new();
    scan(stream, predicate, |symbol| taken.push(symbol))?;
    Ok(taken)
}

/// Consume symbols until `predicate` holds, returning them in order.
pub fn take_until<S, P>(stream: &mut S, mut predicate: P) -> ParseResult<Vec<S::Symbol>>
where
    S: ParseStream + ?Sized,
    P: FnMut(&S::Symbol) -> bool,
{
    take_while(stream, |symbol| !predicate(symbol))
}

/// Skip symbols while `predicate` holds.
pub fn drop_while<S, P>(stream: &mut S, predicate: P) -> ParseResult<()>
where
    S: ParseStream + ?Sized,
    P: FnMut(&S::Symbol) -> bool,
{
    scan(stream, predicate, drop)
}

/// Skip symbols until `predicate` holds.
pub fn drop_until<S, P>(stream: &mut S, mut predicate: P) -> ParseResult<()>
where
    S: ParseStream + ?Sized,
    P: FnMut(&S::Symbol) -> bool,
{
    drop_while(stream, |symbol| !predicate(symbol))
}

fn scan<S, P, K>(stream: &mut S, mut predicate: P, mut sink: K) -> ParseResult<()>
where
    S: ParseStream + ?Sized,
    P: FnMut(&S::Symbol) -> bool,
    K: FnMut(S::Symbol),
{
    while !stream.eof() {
        if !predicate(&stream.peek()?) {
            break;
        }
        sink(stream.get()?);
    }
    Ok(())
}
