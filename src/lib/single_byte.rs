//! Probing single-byte code pages.
//!
//! A probe decodes each candidate byte on its own and keeps the ones that
//! decode, so a fixture holds every byte its code page assigns, in ascending
//! order.

use std::path::{Path, PathBuf};

use crate::catalog::{ByteDecoder, CodePage, Probe};
use crate::{Result, fixture_path, write_fixture};

/// Result of probing a code page: the decodable bytes and what they decode to.
///
/// `text` has exactly one char per byte of `bytes`, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Probed {
    pub bytes: Vec<u8>,
    pub text: String,
}

/// Probe `decoder` over the byte values `probe` selects.
///
/// Undecodable bytes are dropped from both the fixture bytes and the text.
pub fn probe<D: ByteDecoder + ?Sized>(decoder: &D, probe: &Probe) -> Probed {
    probe_bytes(decoder, probe.bytes())
}

/// Probe `decoder` over an explicit sequence of byte values.
pub fn probe_bytes<D, I>(decoder: &D, bytes: I) -> Probed
where
    D: ByteDecoder + ?Sized,
    I: IntoIterator<Item = u8>,
{
    let mut res = Probed::default();
    for byte in bytes {
        if let Some(ch) = decoder.decode_byte(byte) {
            res.bytes.push(byte);
            res.text.push(ch);
        }
    }
    res
}

/// Probe `page` and write its fixture file into `dir`.
pub fn write_code_page(dir: &Path, page: &CodePage) -> Result<(PathBuf, Probed)> {
    let candidates = page.probe.bytes();
    let probed = probe_bytes(page, candidates.iter().copied());
    let path = fixture_path(dir, page.name);
    write_fixture(&path, &probed.bytes)?;
    tracing::debug!(
        encoding = page.name,
        skipped = candidates.len() - probed.bytes.len(),
        "probed code page"
    );
    Ok((path, probed))
}

/// Decode a whole single-byte fixture, failing on the first unassigned byte.
pub fn decode_all<D: ByteDecoder + ?Sized>(decoder: &D, bytes: &[u8]) -> Option<String> {
    bytes.iter().map(|&b| decoder.decode_byte(b)).collect()
}
