#[cfg(test)]
pub mod tests {
    use crate::literal::{LiteralError, escape_literal, unescape_literal};
    use crate::sampler::boundary_sample;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("", "''")]
    #[case::plain_ascii("hello world", "'hello world'")]
    #[case::backslash("a\\b", "'a\\\\b'")]
    #[case::named_controls("\t\n\r", "'\\t\\n\\r'")]
    #[case::other_control("\0\x1b", "'\\x00\\x1b'")]
    #[case::delete("\x7f", "'\\x7f'")]
    // Quote selection
    #[case::single_quote_only("it's", "\"it's\"")]
    #[case::double_quote_only("say \"hi\"", "'say \"hi\"'")]
    #[case::both_quotes("it's \"x\"", "'it\\'s \"x\"'")]
    // Non-ASCII widths
    #[case::latin1_range("\u{e9}\u{ff}", "'\\xe9\\xff'")]
    #[case::c1_control("\u{85}", "'\\x85'")]
    #[case::bmp("\u{20ac}\u{ffff}", "'\\u20ac\\uffff'")]
    #[case::supplementary("\u{10000}\u{10ffff}", "'\\U00010000\\U0010ffff'")]
    fn test_escape_literal(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(escape_literal(text), expected);
    }

    #[test]
    fn test_escape_boundary_sample() {
        assert_eq!(
            escape_literal(&boundary_sample()),
            concat!(
                "'{|}~\\x7f\\x80\\x81\\x82\\x83\\x84\\x85",
                "\\u07fb\\u07fc\\u07fd\\u07fe\\u07ff\\u0800\\u0801\\u0802\\u0803\\u0804\\u0805",
                "\\ufffb\\ufffc\\ufffd\\ufffe\\uffff",
                "\\U00010000\\U00010001\\U00010002\\U00010003\\U00010004\\U00010005'",
            )
        );
    }

    #[rstest]
    #[case::uppercase_hex("'\\xE9\\u20AC'", "\u{e9}\u{20ac}")]
    #[case::escaped_double_quote("'\\\"'", "\"")]
    #[case::raw_non_ascii("'\u{e9}'", "\u{e9}")]
    #[case::double_quoted("\"it's\"", "it's")]
    fn test_unescape_accepts(#[case] literal: &str, #[case] expected: &str) {
        assert_eq!(unescape_literal(literal).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("", LiteralError::MissingQuote)]
    #[case::no_quote("abc", LiteralError::MissingQuote)]
    #[case::unterminated("'abc", LiteralError::Unterminated)]
    #[case::dangling_backslash("'abc\\", LiteralError::Unterminated)]
    #[case::mismatched_quote("'abc\"", LiteralError::Unterminated)]
    #[case::unknown_escape("'\\q'", LiteralError::UnknownEscape('q'))]
    #[case::short_hex("'\\x4'", LiteralError::BadHex { marker: 'x', digits: 2 })]
    #[case::non_hex("'\\u12g4'", LiteralError::BadHex { marker: 'u', digits: 4 })]
    #[case::surrogate("'\\ud800'", LiteralError::InvalidScalar(0xD800))]
    #[case::beyond_max("'\\U00110000'", LiteralError::InvalidScalar(0x11_0000))]
    #[case::trailing("'a' ", LiteralError::TrailingText)]
    fn test_unescape_rejects(#[case] literal: &str, #[case] expected: LiteralError) {
        assert_eq!(unescape_literal(literal), Err(expected));
    }

    proptest! {
        #[test]
        fn prop_escape_round_trips(text in any::<String>()) {
            prop_assert_eq!(unescape_literal(&escape_literal(&text)), Ok(text));
        }

        #[test]
        fn prop_escape_is_printable_ascii(text in any::<String>()) {
            let literal = escape_literal(&text);
            prop_assert!(literal.bytes().all(|b| (0x20..=0x7E).contains(&b)));
        }
    }
}
