use super::*;

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}

#[test]
fn test_prelude_parses_a_word() {
    use crate::prelude::*;

    let mut stream = MemoryStream::from("  ravel!");
    text::consume_whitespace(&mut stream).ok();
    let word = text::take_while(&mut stream, text::is_alpha).ok();
    assert_eq!(word.as_deref(), Some("ravel"));
    assert_eq!(stream.pos(), 7);
}
