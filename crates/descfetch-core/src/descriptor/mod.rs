//! Remote descriptor document: fetch, parse, re-emit.
//!
//! The document describes the variables of the employment-indicator dataset.
//! Its shape belongs to the upstream repository, so it is kept as an opaque
//! `serde_json::Value`; the only check is that the body is valid JSON.
//! Object key order and number text survive the round trip
//! (`serde_json/preserve_order`, `serde_json/arbitrary_precision`).

mod emit;
mod error;

use std::io::Write;

use serde_json::Value;

use crate::transport::HttpTransport;

pub use emit::{emit, EmitSummary};
pub use error::DescriptorError;

/// Where the descriptor document lives upstream.
pub const DESCRIPTOR_URL: &str =
    "https://raw.githubusercontent.com/elaval/datos-empleo-chile/refs/heads/main/docs/variables.json";

/// Name the site build gives the captured output.
pub const OUTPUT_FILE_NAME: &str = "descripciones.json";

/// A parsed descriptor document.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor(Value);

impl Descriptor {
    /// Parse a response body. Any syntactically valid JSON is accepted.
    pub fn from_slice(body: &[u8]) -> Result<Self, DescriptorError> {
        serde_json::from_slice(body)
            .map(Descriptor)
            .map_err(DescriptorError::Parse)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Compact encoding: no whitespace, no trailing newline.
    pub fn to_compact_bytes(&self) -> Result<Vec<u8>, DescriptorError> {
        serde_json::to_vec(&self.0).map_err(DescriptorError::Encode)
    }
}

/// Issue exactly one GET for `url`, require a 2xx status, and parse the body.
pub fn fetch_descriptor<T: HttpTransport + ?Sized>(
    transport: &T,
    url: &str,
) -> Result<Descriptor, DescriptorError> {
    tracing::debug!(url, "fetching descriptor");
    let response = transport.get(url)?;
    if !response.is_success() {
        tracing::warn!(url, status = response.status, "descriptor fetch rejected");
        return Err(DescriptorError::Fetch {
            url: url.to_string(),
            status: response.status,
        });
    }
    let doc = Descriptor::from_slice(&response.body)?;
    tracing::debug!(url, bytes = response.body.len(), "descriptor parsed");
    Ok(doc)
}

/// Fetch, then emit to `out`. `out` is only written once the body has parsed.
pub fn fetch_and_emit<T, W>(transport: &T, url: &str, out: &mut W) -> Result<EmitSummary, DescriptorError>
where
    T: HttpTransport + ?Sized,
    W: Write + ?Sized,
{
    let doc = fetch_descriptor(transport, url)?;
    emit(&doc, out)
}
