//! Ravel: backtracking parser combinators over pluggable parse streams.
//!
//! This crate ties the workspace together:
//!
//! - [`ravel_stream`]: the [`ParseStream`] contract and its backends
//!   ([`SliceStream`], [`MemoryStream`], [`ReaderStream`]).
//! - [`ravel_parse`]: generic combinators ([`try_parse`], [`option`],
//!   [`many`], [`take_while`], ...).
//! - [`text`]: byte-oriented text parsers (literals, whitespace, numbers).
//!
//! Most users want the [`prelude`].
//!
//! ```text
//! use ravel::prelude::*;
//!
//! let mut stream = MemoryStream::from("let answer = 42");
//! text::string(&mut stream, "let")?;
//! text::consume_whitespace(&mut stream)?;
//! let name = text::take_while(&mut stream, text::is_alpha)?;
//! ```
//!
//! # Logging
//!
//! Backtracking, rejected alternatives and reader refills are reported
//! through `tracing` at `trace`/`debug` level. [`init_tracing`] installs a
//! subscriber driven by `RUST_LOG` for quick inspection; applications with
//! their own subscriber should not call it.

use std::sync::Once;

pub use ravel_parse::{
    alt, drop_until, drop_while, end_of_input, look_ahead, many, many_one, none_of, one_of,
    option, optional, satisfy, sep_by, take_until, take_while, try_parse, SymbolSet,
};
pub use ravel_stream::{
    Error, MemoryStream, ParseError, ParseResult, ParseStream, ReaderConfig, ReaderStream,
    SliceStream, StreamError, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE,
};
pub use ravel_text as text;

/// Everything needed to write parsers, in one import.
///
/// Text parsers stay behind the `text` path since several of them
/// (`take_while`, `take_until`) share names with the generic combinators.
pub mod prelude {
    pub use crate::text;
    pub use ravel_parse::{
        alt, drop_until, drop_while, end_of_input, look_ahead, many, many_one, none_of, one_of,
        option, optional, satisfy, sep_by, take_until, take_while, try_parse,
    };
    pub use ravel_stream::{
        Error, MemoryStream, ParseError, ParseResult, ParseStream, ReaderConfig, ReaderStream,
        SliceStream, StreamError,
    };
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=ravel_parse=trace` to watch backtracking or
/// `RUST_LOG=ravel_stream=debug` to watch reader refills.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
