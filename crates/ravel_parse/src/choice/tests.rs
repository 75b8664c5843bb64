use super::*;
use crate::{many_one, one_of};
use pretty_assertions::assert_eq;
use ravel_stream::MemoryStream;

type Stream = MemoryStream<u8>;

/// Match a literal, consuming the matched prefix even on mismatch.
fn literal(stream: &mut Stream, text: &str) -> ParseResult<String> {
    for &byte in text.as_bytes() {
        if stream.peek()? != byte {
            return Err(stream.error("literal mismatch"));
        }
        stream.get()?;
    }
    Ok(text.to_string())
}

fn match_a(stream: &mut Stream) -> ParseResult<String> {
    literal(stream, "abx")
}

fn match_b(stream: &mut Stream) -> ParseResult<String> {
    literal(stream, "aby")
}

fn match_c(stream: &mut Stream) -> ParseResult<String> {
    literal(stream, "abz")
}

#[test]
fn test_first_success_wins() {
    let mut stream = Stream::from("abcd");
    let alternatives: [fn(&mut Stream) -> ParseResult<&'static str>; 2] = [
        |s| literal(s, "ab").map(|_| "short"),
        |s| literal(s, "abc").map(|_| "long"),
    ];
    assert_eq!(option(&mut stream, &alternatives).ok(), Some("short"));
    assert_eq!(stream.pos(), 2);

    // Reordering the list changes the outcome.
    let mut stream = Stream::from("abcd");
    let reversed = [alternatives[1], alternatives[0]];
    assert_eq!(option(&mut stream, &reversed).ok(), Some("long"));
    assert_eq!(stream.pos(), 3);
}

#[test]
fn test_later_alternative_sees_original_input() {
    let mut stream = Stream::from("aby!");
    let alternatives: [fn(&mut Stream) -> ParseResult<String>; 3] = [match_a, match_b, match_c];
    assert_eq!(option(&mut stream, &alternatives).ok(), Some("aby".to_string()));
    assert_eq!(stream.peek().ok(), Some(b'!'));
}

#[test]
fn test_none_match_leaves_stream_unmoved() {
    let mut stream = Stream::from("zzabq");
    let _ = stream.get();
    let _ = stream.get();
    let alternatives: [fn(&mut Stream) -> ParseResult<String>; 3] = [match_a, match_b, match_c];
    let result = option(&mut stream, &alternatives);
    let err = result.err().and_then(|e| e.into_parse().ok());
    assert_eq!(err.map(|e| e.position()), Some(2));
    assert_eq!(stream.pos(), 2);
}

#[test]
fn test_empty_alternative_list_fails() {
    let mut stream = Stream::from("a");
    let alternatives: [fn(&mut Stream) -> ParseResult<u8>; 0] = [];
    assert!(option(&mut stream, &alternatives).is_err());
    assert_eq!(stream.pos(), 0);
}

#[test]
fn test_dyn_alternatives() {
    let mut stream = Stream::from("eef");
    let digits = |s: &mut Stream| many_one(s, |s| one_of(s, "0123456789")).map(|v| v.len());
    let letters = |s: &mut Stream| many_one(s, |s| one_of(s, "ef")).map(|v| v.len());
    let alternatives: [&dyn Fn(&mut Stream) -> ParseResult<usize>; 2] = [&digits, &letters];
    assert_eq!(option(&mut stream, &alternatives).ok(), Some(3));
    assert!(stream.eof());
}

#[test]
fn test_alt_macro_mixed_closures() {
    let mut stream = Stream::from("abz");
    let picked = alt!(
        &mut stream,
        |s| match_a(s).map(|_| 1),
        |s| match_b(s).map(|_| 2),
        |s: &mut Stream| match_c(s).map(|_| 3),
    );
    assert_eq!(picked.ok(), Some(3));
    assert!(stream.eof());
}

#[test]
fn test_alt_macro_all_fail() {
    let mut stream = Stream::from("abq");
    let picked: ParseResult<String> = alt!(&mut stream, match_a, match_b);
    let err = picked.err().and_then(|e| e.into_parse().ok());
    assert_eq!(err.map(|e| e.message().to_string()), Some("no alternative matched".to_string()));
    assert_eq!(stream.pos(), 0);
}

#[test]
fn test_alt_macro_reborrows_stream() {
    let mut owned = Stream::from("xy");
    let stream = &mut owned;
    let first: ParseResult<u8> = alt!(stream, |s| one_of(s, "x"));
    let second: ParseResult<u8> = alt!(stream, |s| one_of(s, "y"));
    assert_eq!((first.ok(), second.ok()), (Some(b'x'), Some(b'y')));
}
