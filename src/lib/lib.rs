// Library interface for encoding-fixtures
// Exposes the fixture generator, the catalogs it walks and the manifest codec
// so integration tests and fuzz targets can drive them directly.

pub mod catalog;
mod error;
pub mod generator;
pub mod literal;
#[cfg(test)]
mod literal_test;
pub mod manifest;
pub mod sampler;
pub mod single_byte;
pub mod unicode;

use std::path::{Path, PathBuf};

pub use catalog::{
    ByteDecoder, CodePage, Codec, LEGACY_LATIN1, Probe, SINGLE_BYTE_CATALOG, UNICODE_CATALOG,
    UnicodeFormat, WindowsPage,
};
pub use error::{Error, Result};
pub use generator::{GenerationReport, GeneratorConfig, VerifyReport, generate, verify};
pub use literal::{LiteralError, escape_literal, unescape_literal};
pub use manifest::{Manifest, ManifestEntry, parse_manifest};
pub use sampler::boundary_sample;
pub use single_byte::{Probed, probe};
pub use unicode::{BomMode, UnicodeFixture};

/// Manifest key of the entry holding the shared Unicode sample.
pub const UNICODE_ENTRY: &str = "unicode";

/// Default manifest file name inside the output directory.
pub const DEFAULT_MANIFEST: &str = "strings.nest";

/// Path of the fixture file for `stem` inside `dir`, e.g. `dir/file_cp1252.txt`.
pub fn fixture_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("file_{stem}.txt"))
}

/// Write one fixture file in a single scoped create/write/close.
pub(crate) fn write_fixture(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote fixture");
    Ok(())
}

/// Read a whole fixture file back.
pub(crate) fn read_fixture(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
