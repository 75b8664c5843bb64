//! Single-symbol tests.
//!
//! These peek before deciding, so a failure never consumes anything and no
//! backtracking is needed.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use ravel_stream::{ParseResult, ParseStream};

/// A set of symbol values that `one_of` and `none_of` test membership against.
pub trait SymbolSet<T> {
    /// Returns `true` if `symbol` is in the set.
    fn contains_symbol(&self, symbol: &T) -> bool;
}

impl<T: PartialEq> SymbolSet<T> for [T] {
    fn contains_symbol(&self, symbol: &T) -> bool {
        self.contains(symbol)
    }
}

impl<T: PartialEq, const N: usize> SymbolSet<T> for [T; N] {
    fn contains_symbol(&self, symbol: &T) -> bool {
        self.contains(symbol)
    }
}

impl<T: PartialEq> SymbolSet<T> for Vec<T> {
    fn contains_symbol(&self, symbol: &T) -> bool {
        self.contains(symbol)
    }
}

impl<T: Eq + Hash, H: BuildHasher> SymbolSet<T> for HashSet<T, H> {
    fn contains_symbol(&self, symbol: &T) -> bool {
        self.contains(symbol)
    }
}

impl<T: Ord> SymbolSet<T> for BTreeSet<T> {
    fn contains_symbol(&self, symbol: &T) -> bool {
        self.contains(symbol)
    }
}

/// Byte sets written as string literals: `one_of(stream, "+-")`.
impl SymbolSet<u8> for str {
    fn contains_symbol(&self, symbol: &u8) -> bool {
        self.as_bytes().contains(symbol)
    }
}

impl<T, S: SymbolSet<T> + ?Sized> SymbolSet<T> for &S {
    fn contains_symbol(&self, symbol: &T) -> bool {
        (**self).contains_symbol(symbol)
    }
}

/// Consume the next symbol if it is in `set`.
pub fn one_of<S, Set>(stream: &mut S, set: &Set) -> ParseResult<S::Symbol>
where
    S: ParseStream + ?Sized,
    Set: SymbolSet<S::Symbol> + ?Sized,
{
    if set.contains_symbol(&stream.peek()?) {
        stream.get()
    } else {
        Err(stream.error("symbol is not one of the permitted set"))
    }
}

/// Consume the next symbol if it is not in `set`.
pub fn none_of<S, Set>(stream: &mut S, set: &Set) -> ParseResult<S::Symbol>
where
    S: ParseStream + ?Sized,
    Set: SymbolSet<S::Symbol> + ?Sized,
{
    if set.contains_symbol(&stream.peek()?) {
        Err(stream.error("symbol is in the forbidden set"))
    } else {
        stream.get()
    }
}

/// Consume the next symbol if `predicate` accepts it.
pub fn satisfy<S, P>(stream: &mut S, predicate: P) -> ParseResult<S::Symbol>
where
    S: ParseStream + ?Sized,
    P: FnOnce(&S::Symbol) -> bool,
{
    if predicate(&stream.peek()?) {
        stream.get()
    } else {
        Err(stream.error("symbol rejected by predicate"))
    }
}

/// Succeed only when no input remains.
pub fn end_of_input<S>(stream: &mut S) -> ParseResult<()>
where
    S: ParseStream + ?Sized,
{
    if stream.eof() {
        Ok(())
    } else {
        Err(stream.error("expected end of input"))
    }
}
