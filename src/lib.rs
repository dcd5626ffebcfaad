//! Classifies a directory of cryptographic material and reconstructs the
//! logical certificate chain: root CA, ordered intermediates, end-entity
//! certificate and its private key.
//!
//! The pipeline has two stages with a barrier between them: every file is
//! read and classified into an [`ArtifactDescriptor`] first, then the full
//! set is handed to the chain assembler. Classification failures (unreadable
//! directory or file, malformed certificate) abort the run; assembly itself
//! never fails and reports whatever slots it could fill.

pub mod chain;
pub mod classify;
pub mod error;
pub mod identity;
pub mod report;

use std::path::Path;

pub use crate::chain::{assemble, ChainResult};
pub use crate::classify::{classify, classify_directory, ArtifactDescriptor, ArtifactKind, CertFormat};
pub use crate::error::{Error, Result};
pub use crate::identity::IdentityRecord;

/// Runs the whole pipeline over one certificate directory.
pub fn run(dir: &Path) -> Result<ChainResult> {
    let descriptors = classify_directory(dir)?;
    Ok(assemble(descriptors))
}
