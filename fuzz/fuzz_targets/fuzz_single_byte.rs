#![no_main]

use encoding_fixtures::generator::code_pages;
use encoding_fixtures::single_byte::{decode_all, probe_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Probing an arbitrary byte sequence keeps exactly the decodable bytes,
    // one char per byte, and the kept bytes decode back to the probed text
    for page in code_pages() {
        let probed = probe_bytes(page, data.iter().copied());
        assert!(probed.bytes.len() <= data.len());
        assert_eq!(probed.text.chars().count(), probed.bytes.len(), "{}", page.name);
        assert_eq!(decode_all(page, &probed.bytes).as_deref(), Some(probed.text.as_str()));
    }
});
