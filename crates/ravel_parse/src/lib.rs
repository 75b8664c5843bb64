//! Backtracking parser combinators.
//!
//! Every combinator here is written against the [`ParseStream`] capability
//! set alone, so it works unchanged over any backend. All position state
//! lives in the stream; combinators hold none of their own between calls.
//!
//! # Backtracking
//!
//! [`try_parse`] is the single mechanism that undoes partial consumption:
//! it records `pos()` before an attempt and returns there if the attempt
//! fails with a [`ParseError`]. Combinators that may consume several symbols
//! before discovering a mismatch ([`many`], [`option`], [`optional`],
//! [`sep_by`]) wrap each attempt in it. Single-symbol tests ([`one_of`],
//! [`none_of`], [`satisfy`]) peek before consuming and never need to.
//!
//! Non-recoverable [`StreamError`]s pass through every combinator untouched.
//!
//! # Usage
//!
//! ```text
//! let mut stream = MemoryStream::from("aaabcdeeeef");
//! let run = take_while(&mut stream, |c| *c == b'a')?;   // b"aaa"
//! let keyword = option(&mut stream, &[parse_let, parse_var])?;
//! let tail = many(&mut stream, |s| one_of(s, "ef"))?;
//! ```

mod attempt;
mod choice;
mod repeat;
mod scan;
mod symbol;

pub use attempt::{look_ahead, optional, try_parse};
pub use choice::option;
pub use repeat::{many, many_one, sep_by};
pub use scan::{drop_until, drop_while, take_until, take_while};
pub use symbol::{end_of_input, none_of, one_of, satisfy, SymbolSet};

// Re-exported so downstream crates (and the `alt!` macro) need only one import.
pub use ravel_stream::{Error, ParseError, ParseResult, ParseStream, StreamError};
