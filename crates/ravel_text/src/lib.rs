//! Text parsers over byte streams.
//!
//! Everything here works on any [`ParseStream`](ravel_stream::ParseStream)
//! whose symbols are bytes. A byte becomes one `char` when collected into a
//! `String`; no UTF-8 decoding is attempted.
//!
//! Leaf matchers such as [`string`] may consume part of the input before
//! discovering a mismatch. The value parsers ([`parse_bool`], [`parse_int`],
//! [`parse_float`], [`parse_digit`]) are wrapped so that they consume nothing
//! on failure.

mod classes;
mod literal;
mod location;
mod value;

pub use classes::{is_alpha, is_alphanum, is_lowercase, is_number, is_uppercase, is_whitespace};
pub use literal::{consume_whitespace, parse_string, string, take_until, take_while};
pub use location::{location, Location};
pub use value::{parse_bool, parse_digit, parse_float, parse_int};
