//! Network-level failures, classified from libcurl errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connect or total timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),
    /// DNS, refused connection, reset, or a dropped stream.
    #[error("connection failed: {0}")]
    Connection(String),
    /// Anything else curl reports (bad URL, TLS setup, ...).
    #[error("transport error: {0}")]
    Other(String),
}

impl From<curl::Error> for TransportError {
    fn from(e: curl::Error) -> Self {
        if e.is_operation_timedout() {
            return TransportError::Timeout(e.to_string());
        }
        if e.is_couldnt_connect()
            || e.is_couldnt_resolve_host()
            || e.is_couldnt_resolve_proxy()
            || e.is_read_error()
            || e.is_recv_error()
            || e.is_send_error()
            || e.is_got_nothing()
            || e.is_ssl_connect_error()
        {
            return TransportError::Connection(e.to_string());
        }
        TransportError::Other(e.to_string())
    }
}
