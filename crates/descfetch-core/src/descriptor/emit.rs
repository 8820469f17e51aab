//! Write the compact document to its destination.

use std::io::Write;

use super::{Descriptor, DescriptorError};
use crate::checksum;

/// What was written by [`emit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    /// Number of bytes written.
    pub bytes: usize,
    /// SHA-256 of the written bytes, lowercase hex.
    pub sha256: String,
}

/// Encode `doc` compactly and write it with a single `write_all`, then flush.
///
/// Encoding happens before the writer is touched, so an encode failure
/// leaves the destination untouched.
pub fn emit<W: Write + ?Sized>(doc: &Descriptor, out: &mut W) -> Result<EmitSummary, DescriptorError> {
    let bytes = doc.to_compact_bytes()?;
    out.write_all(&bytes).map_err(DescriptorError::Emit)?;
    out.flush().map_err(DescriptorError::Emit)?;

    let summary = EmitSummary {
        bytes: bytes.len(),
        sha256: checksum::sha256_bytes(&bytes),
    };
    tracing::info!(bytes = summary.bytes, sha256 = %summary.sha256, "descriptor emitted");
    Ok(summary)
}
