#![no_main]

use encoding_fixtures::{Manifest, parse_manifest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(src) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing arbitrary text must not panic; whatever parses must be written
    // back as a manifest that parses to the same entries
    if let Ok(entries) = parse_manifest(src) {
        let mut manifest = Manifest::new(Vec::new());
        for entry in &entries {
            manifest.record(&entry.name, &entry.text).unwrap();
        }
        let rendered = String::from_utf8(manifest.finish().unwrap()).unwrap();
        assert_eq!(parse_manifest(&rendered).unwrap(), entries);
    }
});
