//! Descriptor fetch error type.

use std::fmt;

use crate::transport::TransportError;

/// Every way a fetch-and-emit run can fail. All of them are fatal; nothing
/// is retried and nothing is written on failure.
#[derive(Debug)]
pub enum DescriptorError {
    /// Server answered with a non-2xx status.
    Fetch { url: String, status: u32 },
    /// The request never produced a response (timeout, DNS, reset).
    Transport(TransportError),
    /// The body is not valid JSON.
    Parse(serde_json::Error),
    /// Re-encoding the parsed document failed.
    Encode(serde_json::Error),
    /// Writing the document to its destination failed.
    Emit(std::io::Error),
}

impl DescriptorError {
    /// HTTP status for `Fetch` errors.
    pub fn status(&self) -> Option<u32> {
        match self {
            DescriptorError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::Fetch { url, status } => {
                write!(f, "fetch failed: {} returned HTTP {}", url, status)
            }
            DescriptorError::Transport(e) => write!(f, "fetch failed: {}", e),
            DescriptorError::Parse(e) => write!(f, "invalid JSON body: {}", e),
            DescriptorError::Encode(e) => write!(f, "encode JSON: {}", e),
            DescriptorError::Emit(e) => write!(f, "write output: {}", e),
        }
    }
}

impl std::error::Error for DescriptorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DescriptorError::Transport(e) => Some(e),
            DescriptorError::Parse(e) | DescriptorError::Encode(e) => Some(e),
            DescriptorError::Emit(e) => Some(e),
            DescriptorError::Fetch { .. } => None,
        }
    }
}

impl From<TransportError> for DescriptorError {
    fn from(e: TransportError) -> Self {
        DescriptorError::Transport(e)
    }
}
