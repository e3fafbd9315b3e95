//! Error types for fixture generation and verification.
//!
//! A byte that a code page cannot decode is not an error: probing reports it
//! as `None` and moves on. Everything here aborts the run.

use std::path::PathBuf;

use thiserror::Error;

use crate::literal::LiteralError;

/// Top-level error type for the generator and the verifier.
#[derive(Debug, Error)]
pub enum Error {
    /// A fixture or manifest file could not be created, written or read.
    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest literal could not be parsed.
    #[error("manifest line {line}: bad literal")]
    Literal {
        line: usize,
        #[source]
        source: LiteralError,
    },

    /// A manifest line does not have the `<literal> \` / `= <name>_text` shape.
    #[error("manifest line {line}: {reason}")]
    MalformedManifest { line: usize, reason: String },

    /// The manifest has no entry for an encoding the catalogs name.
    #[error("manifest has no entry for '{name}'")]
    MissingEntry { name: String },

    /// A fixture does not decode to the string its manifest entry records.
    #[error("fixture '{}' does not decode to the '{encoding}' manifest entry", file.display())]
    Mismatch { file: PathBuf, encoding: String },
}

pub type Result<T> = std::result::Result<T, Error>;
