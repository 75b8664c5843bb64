use super::*;
use crate::{one_of, satisfy};
use pretty_assertions::assert_eq;
use ravel_stream::{Error, MemoryStream, StreamError};

type Stream = MemoryStream<u8>;

/// "ab" pairs; consumes the 'a' before failing on anything but 'b'.
fn pair(stream: &mut Stream) -> ParseResult<(u8, u8)> {
    let a = one_of(stream, "a")?;
    let b = one_of(stream, "b")?;
    Ok((a, b))
}

#[test]
fn test_many_collects_in_order() {
    let mut stream = Stream::from("aaabcdeeeef");
    for _ in 0..6 {
        let _ = stream.get();
    }
    let tail = many(&mut stream, |s| one_of(s, "ef")).unwrap_or_default();
    assert_eq!(tail, b"eeeef");
    assert!(stream.eof());
}

#[test]
fn test_many_empty_when_first_attempt_fails() {
    let mut stream = Stream::from("xyz");
    let result = many(&mut stream, |s| one_of(s, "ef"));
    assert_eq!(result.ok(), Some(Vec::new()));
    assert_eq!(stream.pos(), 0);
}

#[test]
fn test_many_discards_partial_final_attempt() {
    let mut stream = Stream::from("ababac");
    let pairs = many(&mut stream, pair).unwrap_or_default();
    assert_eq!(pairs.len(), 2);
    // The third attempt consumed 'a' before failing on 'c'; that is undone.
    assert_eq!(stream.pos(), 4);
    assert_eq!(stream.peek().ok(), Some(b'a'));
}

#[test]
fn test_many_propagates_stream_errors() {
    let mut stream = Stream::from("aaaa");
    let mut calls = 0;
    let result = many(&mut stream, |s| {
        calls += 1;
        if calls == 3 {
            return Err(StreamError::InvalidConfig("simulated").into());
        }
        s.get()
    });
    assert!(matches!(result, Err(Error::Stream(_))));
}

#[test]
fn test_many_one_requires_a_success() {
    let mut stream = Stream::from("abx");
    let result = many_one(&mut stream, |s| one_of(s, "ef"));
    let err = result.err().and_then(|e| e.into_parse().ok());
    assert_eq!(
        err.as_ref().map(ParseError::message),
        Some("no parses succeeded")
    );
    assert_eq!(stream.pos(), 0);
}

#[test]
fn test_many_one_after_partial_failure_stays_unmoved() {
    let mut stream = Stream::from("ac");
    assert!(many_one(&mut stream, pair).is_err());
    assert_eq!(stream.pos(), 0);
}

#[test]
fn test_many_one_success() {
    let mut stream = Stream::from("ffe!");
    let run = many_one(&mut stream, |s| one_of(s, "ef")).unwrap_or_default();
    assert_eq!(run, b"ffe");
    assert_eq!(stream.peek().ok(), Some(b'!'));
}

#[test]
fn test_sep_by() {
    let mut stream = Stream::from("1,2,3");
    let digits = sep_by(&mut stream, |s| satisfy(s, u8::is_ascii_digit), |s| one_of(s, ","));
    assert_eq!(digits.unwrap_or_default(), b"123");
    assert!(stream.eof());
}

#[test]
fn test_sep_by_leaves_trailing_separator() {
    let mut stream = Stream::from("1,2,;");
    let digits = sep_by(&mut stream, |s| satisfy(s, u8::is_ascii_digit), |s| one_of(s, ","));
    assert_eq!(digits.unwrap_or_default(), b"12");
    assert_eq!(stream.peek().ok(), Some(b','));
}

#[test]
fn test_sep_by_empty() {
    let mut stream = Stream::from(";");
    let digits = sep_by(&mut stream, |s| satisfy(s, u8::is_ascii_digit), |s| one_of(s, ","));
    assert_eq!(digits.ok(), Some(Vec::new()));
    assert_eq!(stream.pos(), 0);
}

// === Property tests ===

mod proptest_repeat {
    use super::{many, many_one, one_of, sep_by, ParseStream, Stream};
    use proptest::prelude::*;

    fn input() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(prop::sample::select(b"ab,".to_vec()), 0..32)
    }

    proptest! {
        #[test]
        fn many_one_fails_exactly_when_many_is_empty(data in input(), set in "[ab,]{0,2}") {
            let mut stream = Stream::from(data.clone());
            let all = many(&mut stream, |s| one_of(s, set.as_str())).unwrap_or_default();
            prop_assert_eq!(stream.pos(), all.len());
            prop_assert!(data[..all.len()].iter().all(|c| set.as_bytes().contains(c)));

            let mut stream = Stream::from(data);
            match many_one(&mut stream, |s| one_of(s, set.as_str())) {
                Ok(some) => prop_assert_eq!(some, all),
                Err(err) => {
                    prop_assert!(all.is_empty());
                    prop_assert!(err.is_recoverable());
                    prop_assert_eq!(stream.pos(), 0);
                }
            }
        }

        #[test]
        fn sep_by_never_ends_after_a_separator(data in input()) {
            let mut stream = Stream::from(data);
            let items = sep_by(&mut stream, |s| one_of(s, "ab"), |s| one_of(s, ",")).unwrap_or_default();
            prop_assert_eq!(stream.pos(), (2 * items.len()).saturating_sub(1));
        }
    }
}
