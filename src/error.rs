//! Error types for certificate directory classification.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a classification run.
///
/// There is no skip-and-continue mode: a single unreadable or malformed
/// input aborts the whole pass. Unlinkable certificates inside the chain
/// assembler are not errors and never appear here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to list certificate directory {path:?}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse certificate {name}: {message}")]
    CertificateParse { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
