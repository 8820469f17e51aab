//! HTTP transport seam.
//!
//! The fetcher never touches the network directly; it is handed something
//! implementing [`HttpTransport`]. Production code uses [`CurlTransport`]
//! (libcurl via the `curl` crate); tests substitute an in-memory fake.

mod curl_transport;
mod error;

pub use curl_transport::CurlTransport;
pub use error::TransportError;

/// Status and fully-read body of a GET response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u32, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can perform a single blocking HTTP GET.
///
/// Implementations must not retry: one call is one request on the wire.
pub trait HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}
