#![no_main]

use encoding_fixtures::{escape_literal, unescape_literal};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must survive escaping unchanged
    let text = String::from_utf8_lossy(data);
    let literal = escape_literal(&text);
    assert!(literal.is_ascii(), "escaped literal must be ASCII");
    assert_eq!(unescape_literal(&literal).as_deref(), Ok(&*text));

    // Arbitrary input treated as a literal must never panic, and anything
    // it accepts must re-escape to something that parses to the same text
    if let Ok(parsed) = unescape_literal(&text) {
        assert_eq!(unescape_literal(&escape_literal(&parsed)), Ok(parsed));
    }
});
