//! The shared manifest of expected decoded strings.
//!
//! Each entry spans two lines:
//!
//! ```text
//! '<escaped text>' \
//!     = <name>_text
//! ```
//!
//! The file is append-only while generating and is written as UTF-8, though
//! escaping keeps it pure ASCII.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::literal::{escape_literal, unescape_literal};

const CONTINUATION: &str = " \\";
const ASSIGN_PREFIX: &str = "    = ";
const KEY_SUFFIX: &str = "_text";

/// Manifest writer. Entries are appended in call order and never rewritten.
#[derive(Debug)]
pub struct Manifest<W: Write> {
    out: W,
    entries: usize,
}

impl Manifest<BufWriter<File>> {
    /// Create (truncating) the manifest file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Manifest::new(BufWriter::new(file)))
    }
}

impl<W: Write> Manifest<W> {
    pub fn new(out: W) -> Self {
        Manifest { out, entries: 0 }
    }

    /// Append the entry for `name`.
    pub fn record(&mut self, name: &str, text: &str) -> io::Result<()> {
        write!(
            self.out,
            "{}{CONTINUATION}\n{ASSIGN_PREFIX}{name}{KEY_SUFFIX}\n",
            escape_literal(text)
        )?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries written so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// One parsed manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub text: String,
}

/// Parse a whole manifest, preserving entry order.
///
/// Blank lines between entries are ignored. Line numbers in errors are
/// 1-based.
pub fn parse_manifest(src: &str) -> Result<Vec<ManifestEntry>> {
    let mut entries = Vec::new();
    let mut lines = src.lines().enumerate().map(|(i, l)| (i + 1, l));

    while let Some((line, literal_line)) = lines.next() {
        if literal_line.trim().is_empty() {
            continue;
        }
        let literal = literal_line
            .strip_suffix(CONTINUATION)
            .ok_or_else(|| malformed(line, "expected a literal followed by ' \\'"))?;
        let text = unescape_literal(literal).map_err(|source| Error::Literal { line, source })?;

        let (line, key_line) = lines
            .next()
            .ok_or_else(|| malformed(line + 1, "missing '= <name>_text' line"))?;
        let name = key_line
            .strip_prefix(ASSIGN_PREFIX)
            .and_then(|k| k.strip_suffix(KEY_SUFFIX))
            .filter(|n| !n.is_empty())
            .ok_or_else(|| malformed(line, "expected '    = <name>_text'"))?;

        entries.push(ManifestEntry {
            name: name.to_string(),
            text,
        });
    }
    Ok(entries)
}

/// Read and parse the manifest at `path`.
pub fn read_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let src = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: PathBuf::from(path),
        source,
    })?;
    parse_manifest(&src)
}

fn malformed(line: usize, reason: &str) -> Error {
    Error::MalformedManifest {
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::LiteralError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(entries: &[(&str, &str)]) -> String {
        let mut manifest = Manifest::new(Vec::new());
        for (name, text) in entries {
            manifest.record(name, text).unwrap();
        }
        String::from_utf8(manifest.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_record_layout() {
        let out = render(&[("ascii", "A\n")]);
        assert_eq!(out, "'A\\n' \\\n    = ascii_text\n");
    }

    #[test]
    fn test_entries_are_appended_in_order() {
        let out = render(&[("cp1252", "\u{20ac}"), ("latin1", "\u{e9}"), ("unicode", "\u{10000}")]);
        assert_eq!(
            out,
            concat!(
                "'\\u20ac' \\\n    = cp1252_text\n",
                "'\\xe9' \\\n    = latin1_text\n",
                "'\\U00010000' \\\n    = unicode_text\n",
            )
        );
    }

    #[test]
    fn test_entry_count() {
        let mut manifest = Manifest::new(Vec::new());
        assert_eq!(manifest.entries(), 0);
        manifest.record("a", "x").unwrap();
        manifest.record("b", "y").unwrap();
        assert_eq!(manifest.entries(), 2);
    }

    #[test]
    fn test_parse_reads_back_what_was_recorded() {
        let written = [("ascii", "it's \"quoted\"\t\\"), ("unicode", "\u{7ff}\u{800}\u{ffff}\u{10000}")];
        let parsed = parse_manifest(&render(&written)).unwrap();
        let expected: Vec<ManifestEntry> = written
            .iter()
            .map(|(name, text)| ManifestEntry {
                name: name.to_string(),
                text: text.to_string(),
            })
            .collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let src = "\n'a' \\\n    = x_text\n\n'b' \\\n    = y_text\n";
        let names: Vec<String> = parse_manifest(src).unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[rstest]
    #[case::no_continuation("'a'\n    = x_text\n", 1)]
    #[case::missing_key_line("'a' \\\n", 2)]
    #[case::bad_key_prefix("'a' \\\n= x_text\n", 2)]
    #[case::bad_key_suffix("'a' \\\n    = x\n", 2)]
    #[case::empty_name("'a' \\\n    = _text\n", 2)]
    fn test_parse_malformed(#[case] src: &str, #[case] expected_line: usize) {
        match parse_manifest(src) {
            Err(Error::MalformedManifest { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("expected MalformedManifest, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_bad_literal_reports_line() {
        let src = "'a' \\\n    = x_text\n'\\q' \\\n    = y_text\n";
        match parse_manifest(src) {
            Err(Error::Literal { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source, LiteralError::UnknownEscape('q'));
            }
            other => panic!("expected Literal error, got {other:?}"),
        }
    }
}
