//! SHA-256 of emitted output.
//!
//! The digest is logged after every successful emit so two builds can be
//! compared without diffing the generated data file.

use sha2::{Digest, Sha256};

/// Compute SHA-256 of `data` and return the digest as lowercase hex.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
