//! Blocking GET over libcurl.

use std::time::Duration;

use super::{HttpResponse, HttpTransport, TransportError};
use crate::config::HttpConfig;

/// Production transport: one libcurl `Easy` handle per request.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
    max_redirections: u32,
    user_agent: String,
}

impl CurlTransport {
    pub fn new(cfg: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirections: cfg.max_redirections,
            user_agent: cfg
                .user_agent
                .clone()
                .unwrap_or_else(|| format!("descfetch/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl HttpTransport for CurlTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirections)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(&self.user_agent)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET completed");

        Ok(HttpResponse { status, body })
    }
}
