//! Position-aware parse streams.
//!
//! A parse stream is an immutable sequence of symbols plus a mutable read
//! cursor. Everything above this crate (combinators, text parsers) is written
//! purely against the [`ParseStream`] capability set, so any backend that
//! honors its contract is substitutable everywhere.
//!
//! # Backends
//!
//! - [`SliceStream`]: borrows a `&[T]`. `Copy`, so a copy is a second cursor.
//! - [`MemoryStream`]: owns its symbols behind an `Arc<[T]>`. Clones share
//!   the data but never the cursor.
//! - [`ReaderStream`]: pulls bytes incrementally from any [`std::io::Read`]
//!   in chunks sized by [`ReaderConfig`], keeping consumed bytes around for
//!   stepping back.
//!
//! # Errors
//!
//! Every primitive returns [`ParseResult`]. A [`ParseError`] means "no match
//! here" and is recoverable; a [`StreamError`] means the input itself is
//! unusable and is never retried. See the [`error`] module.

pub mod config;
pub mod error;
mod memory;
mod reader;
mod slice;
mod stream;

pub use config::{ReaderConfig, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
pub use error::{Error, ParseError, ParseResult, StreamError};
pub use memory::MemoryStream;
pub use reader::ReaderStream;
pub use slice::SliceStream;
pub use stream::ParseStream;
