//! Error types for streams and everything built on them.
//!
//! Two kinds of failure exist and are never conflated:
//!
//! | Kind            | Meaning                                | Combinators     |
//! |-----------------|----------------------------------------|-----------------|
//! | [`ParseError`]  | This attempt did not match here        | Recover from it |
//! | [`StreamError`] | The input itself is unusable           | Pass it through |
//!
//! [`Error`] carries either one so that primitives and combinators share a
//! single [`ParseResult`] type and compose with `?`.

use std::io;
use std::path::PathBuf;

/// Result type returned by every stream primitive and combinator.
pub type ParseResult<T> = Result<T, Error>;

/// A recoverable parse failure.
///
/// Carries a human-readable message and the stream position it refers to.
/// Positions are raw symbol offsets; callers that want line/column
/// information derive it from the original input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("parse error at {position}: {message}")]
pub struct ParseError {
    message: String,
    position: usize,
}

impl ParseError {
    /// Create a parse error at the given stream position.
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        ParseError {
            message: message.into(),
            position,
        }
    }

    /// Human-readable description of what failed to match.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stream position this error refers to.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Re-stamp the error with a different position.
    ///
    /// Used by `try_parse` to report where the failed attempt started.
    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}

/// A non-recoverable stream failure.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// A file-backed stream could not be opened.
    #[error("failed to open `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The underlying reader failed while loading more input.
    #[error("read failed at position {position}: {source}")]
    Read {
        position: usize,
        #[source]
        source: io::Error,
    },

    /// Backend construction arguments were malformed.
    #[error("invalid stream configuration: {0}")]
    InvalidConfig(&'static str),

    /// A backend refused to return to a position it had already handed out.
    ///
    /// Stepping back by a previously valid amount must always succeed, so
    /// this indicates a backend contract violation.
    #[error("could not restore stream to position {target}: {source}")]
    Restore {
        target: usize,
        #[source]
        source: ParseError,
    },
}

/// Either kind of failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Stream(#[from] StreamError),
}

impl Error {
    /// Returns `true` for [`Error::Parse`], the only kind combinators recover.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Borrow the parse error, if this is one.
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Stream(_) => None,
        }
    }

    /// Take the parse error, handing back `self` unchanged otherwise.
    pub fn into_parse(self) -> Result<ParseError, Self> {
        match self {
            Error::Parse(err) => Ok(err),
            other @ Error::Stream(_) => Err(other),
        }
    }
}
