//! Drives the catalogs: probes every code page, writes every Unicode format
//! and records the manifest, then offers the reverse check.
//!
//! Generation is sequential. Only one fixture file is open at a time; the
//! manifest is opened once, passed to each step and flushed at the end. Any
//! I/O error aborts the run, leaving whatever was written so far.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::{CodePage, LEGACY_LATIN1, SINGLE_BYTE_CATALOG, UNICODE_CATALOG};
use crate::error::{Error, Result};
use crate::manifest::{Manifest, ManifestEntry, read_manifest};
use crate::sampler::boundary_sample;
use crate::single_byte::{decode_all, write_code_page};
use crate::unicode::{BomMode, write_unicode_fixture};
use crate::{DEFAULT_MANIFEST, UNICODE_ENTRY, fixture_path, read_fixture};

/// Resolved settings for one generate or verify run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory receiving the fixtures and the manifest.
    pub out_dir: PathBuf,
    /// Manifest file name inside `out_dir`.
    pub manifest_name: String,
    pub bom_mode: BomMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            out_dir: PathBuf::from("."),
            manifest_name: DEFAULT_MANIFEST.to_string(),
            bom_mode: BomMode::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(&self.manifest_name)
    }
}

/// Every code page the generator probes, in generation order.
pub fn code_pages() -> impl Iterator<Item = &'static CodePage> {
    SINGLE_BYTE_CATALOG.iter().chain(std::iter::once(&LEGACY_LATIN1))
}

/// What a generation run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Fixture files in the order they were written.
    pub files: Vec<PathBuf>,
    /// Manifest entries written.
    pub entries: usize,
}

/// Generate every fixture and the manifest into `config.out_dir`.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    let dir = config.out_dir.as_path();
    std::fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let manifest_path = config.manifest_path();
    let io_err = |source: std::io::Error| Error::Io {
        path: manifest_path.clone(),
        source,
    };
    let mut manifest = Manifest::create(&manifest_path)?;
    let mut report = GenerationReport::default();

    for page in code_pages() {
        let (path, probed) = write_code_page(dir, page)?;
        manifest.record(page.name, &probed.text).map_err(io_err)?;
        report.files.push(path);
    }

    let sample = boundary_sample();
    for &format in UNICODE_CATALOG {
        let fixture = write_unicode_fixture(dir, format, &sample, config.bom_mode)?;
        debug!(
            encoding = %format,
            bytes = fixture.primary_len,
            bom_bytes = fixture.bom_len,
            "wrote unicode pair"
        );
        report.files.push(fixture.primary);
        report.files.push(fixture.bom);
    }
    manifest.record(UNICODE_ENTRY, &sample).map_err(io_err)?;

    report.entries = manifest.entries();
    manifest.finish().map_err(io_err)?;

    info!(
        dir = %dir.display(),
        files = report.files.len(),
        entries = report.entries,
        "generated fixtures"
    );
    Ok(report)
}

/// What a verification run checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Fixture files that decoded to their manifest entry.
    pub checked: Vec<PathBuf>,
}

/// Decode every fixture in `config.out_dir` and compare it with the manifest.
///
/// Fails on the first fixture that does not decode, or decodes to a string
/// other than the one its manifest entry records.
pub fn verify(config: &GeneratorConfig) -> Result<VerifyReport> {
    let dir = config.out_dir.as_path();
    let entries = index_entries(read_manifest(&config.manifest_path())?);
    let mut report = VerifyReport::default();

    for page in code_pages() {
        let expected = lookup(&entries, page.name)?;
        let path = fixture_path(dir, page.name);
        let decoded = decode_all(page, &read_fixture(&path)?);
        check(decoded, expected, &path, page.name)?;
        report.checked.push(path);
    }

    let expected = lookup(&entries, UNICODE_ENTRY)?;
    for &format in UNICODE_CATALOG {
        let stem = format.file_stem();

        let primary = fixture_path(dir, &stem);
        check(format.decode(&read_fixture(&primary)?), expected, &primary, format.name())?;
        report.checked.push(primary);

        let bom = fixture_path(dir, &format!("{stem}_bom"));
        check(format.decode_with_bom(&read_fixture(&bom)?), expected, &bom, format.name())?;
        report.checked.push(bom);
    }

    info!(dir = %dir.display(), files = report.checked.len(), "verified fixtures");
    Ok(report)
}

fn index_entries(entries: Vec<ManifestEntry>) -> HashMap<String, String> {
    // Later entries win, matching how a reader assigning the keys in order
    // would see them.
    entries.into_iter().map(|e| (e.name, e.text)).collect()
}

fn lookup<'a>(entries: &'a HashMap<String, String>, name: &str) -> Result<&'a str> {
    entries
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingEntry {
            name: name.to_string(),
        })
}

fn check(decoded: Option<String>, expected: &str, path: &Path, encoding: &str) -> Result<()> {
    if decoded.as_deref() == Some(expected) {
        debug!(path = %path.display(), encoding, "fixture matches");
        Ok(())
    } else {
        Err(Error::Mismatch {
            file: path.to_path_buf(),
            encoding: encoding.to_string(),
        })
    }
}
