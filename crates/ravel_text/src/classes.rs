//! Character-class predicates.
//!
//! They take `&u8` so they can be handed straight to `take_while`,
//! `drop_until`, `satisfy` and friends.

/// Space, tab, newline, carriage return, vertical tab or form feed.
#[inline]
pub fn is_whitespace(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// ASCII decimal digit.
#[inline]
pub fn is_number(byte: &u8) -> bool {
    byte.is_ascii_digit()
}

/// ASCII `A`-`Z`.
#[inline]
pub fn is_uppercase(byte: &u8) -> bool {
    byte.is_ascii_uppercase()
}

/// ASCII `a`-`z`.
#[inline]
pub fn is_lowercase(byte: &u8) -> bool {
    byte.is_ascii_lowercase()
}

/// ASCII letter of either case.
#[inline]
pub fn is_alpha(byte: &u8) -> bool {
    is_uppercase(byte) || is_lowercase(byte)
}

/// ASCII letter or decimal digit.
#[inline]
pub fn is_alphanum(byte: &u8) -> bool {
    is_alpha(byte) || is_number(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_set() {
        for byte in [b' ', b'\t', b'\n', b'\r', 0x0b, 0x0c] {
            assert!(is_whitespace(&byte), "{byte:#04x} should be whitespace");
        }
        assert!(!is_whitespace(&b'a'));
        assert!(!is_whitespace(&0));
    }

    #[test]
    fn test_classes_partition_ascii_alphanumerics() {
        for byte in 0u8..=127 {
            let classes = [is_number(&byte), is_uppercase(&byte), is_lowercase(&byte)];
            let hits = classes.iter().filter(|&&hit| hit).count();
            assert!(hits <= 1, "{byte:#04x} is in more than one class");
            assert_eq!(is_alphanum(&byte), hits == 1);
            assert_eq!(is_alpha(&byte), is_uppercase(&byte) || is_lowercase(&byte));
        }
    }

    #[test]
    fn test_high_bytes_are_not_letters() {
        assert!(!is_alpha(&0xc3));
        assert!(!is_number(&0xb2));
    }
}
