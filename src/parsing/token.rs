use crate::{ENCODED_SEPARATOR, ENCODED_TILDE, ESCAPE, SEPARATOR};
use std::borrow::Cow;

/// Expand the escape sequences of one reference token.
///
/// `~1` is replaced before `~0`, so `~01` decodes to the literal `~1`.
pub fn decode_token(token: &str) -> Cow<'_, str> {
    if !token.contains(ESCAPE) {
        return Cow::Borrowed(token);
    }
    Cow::Owned(
        token
            .replace(ENCODED_SEPARATOR, SEPARATOR)
            .replace(ENCODED_TILDE, ESCAPE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_token("~1"), "/");
        assert_eq!(decode_token("~0"), "~");
        assert_eq!(decode_token("a~1b~0c"), "a/b~c");
        assert_eq!(decode_token("~0~0"), "~~");
    }

    #[test]
    fn test_decode_order() {
        // Replacing ~0 first would produce "/"
        assert_eq!(decode_token("~01"), "~1");
        assert_eq!(decode_token("~0~1"), "~/");
    }

    #[test]
    fn test_plain_token_is_borrowed() {
        assert!(matches!(decode_token("foo"), Cow::Borrowed("foo")));
        assert!(matches!(decode_token(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_unknown_escape_is_left_alone() {
        assert_eq!(decode_token("~2"), "~2");
        assert_eq!(decode_token("a~"), "a~");
    }
}
