//! Unicode fixture writer.
//!
//! Every format gets two files from the same sample: `file_<stem>.txt` and
//! `file_<stem>_bom.txt`. The codec does all the encoding work; this module
//! only decides what goes into the second file.

use std::path::{Path, PathBuf};

use crate::catalog::UnicodeFormat;
use crate::{Result, fixture_path, write_fixture};

/// Content of the `_bom` fixture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BomMode {
    /// Same bytes as the primary fixture.
    #[default]
    Mirror,
    /// The format's byte-order mark followed by the primary bytes.
    Prefix,
}

/// Paths and sizes of the two files written for one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeFixture {
    pub format: UnicodeFormat,
    pub primary: PathBuf,
    pub bom: PathBuf,
    pub primary_len: usize,
    pub bom_len: usize,
}

/// Encode `sample` into the primary and `_bom` fixture contents.
pub fn encode_pair(format: UnicodeFormat, sample: &str, mode: BomMode) -> (Vec<u8>, Vec<u8>) {
    let primary = format.encode(sample);
    let bom = match mode {
        BomMode::Mirror => primary.clone(),
        BomMode::Prefix => [format.bom(), primary.as_slice()].concat(),
    };
    (primary, bom)
}

/// Write both fixture files for `format` into `dir`.
pub fn write_unicode_fixture(
    dir: &Path,
    format: UnicodeFormat,
    sample: &str,
    mode: BomMode,
) -> Result<UnicodeFixture> {
    let stem = format.file_stem();
    let (primary_bytes, bom_bytes) = encode_pair(format, sample, mode);

    let primary = fixture_path(dir, &stem);
    write_fixture(&primary, &primary_bytes)?;

    let bom = fixture_path(dir, &format!("{stem}_bom"));
    write_fixture(&bom, &bom_bytes)?;

    Ok(UnicodeFixture {
        format,
        primary,
        bom,
        primary_len: primary_bytes.len(),
        bom_len: bom_bytes.len(),
    })
}
