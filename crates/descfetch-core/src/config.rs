use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::DESCRIPTOR_URL;
use crate::site::SiteConfig;

/// HTTP client parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request, body included.
    pub timeout_secs: u64,
    /// Redirects followed before giving up.
    pub max_redirections: u32,
    /// Optional User-Agent; defaults to `descfetch/<version>`.
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/descfetch/config.toml`.
///
/// Every field is optional in the file; a missing file means all defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescfetchConfig {
    /// Source of the descriptor document.
    pub url: String,
    pub http: HttpConfig,
    pub site: SiteConfig,
}

impl Default for DescfetchConfig {
    fn default() -> Self {
        Self {
            url: DESCRIPTOR_URL.to_string(),
            http: HttpConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

impl DescfetchConfig {
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.url)?;
        if self.http.timeout_secs == 0 {
            anyhow::bail!("http.timeout_secs must be greater than zero");
        }
        if self.http.connect_timeout_secs == 0 {
            anyhow::bail!("http.connect_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

/// Accept only absolute http(s) URLs.
pub fn validate_url(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw).with_context(|| format!("invalid URL {:?}", raw))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("unsupported URL scheme {:?} in {}", other, raw),
    }
}

/// Existing config file, if any, searched across the XDG config dirs.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("descfetch")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, or defaults if there is none.
/// Never writes to disk.
pub fn load() -> Result<DescfetchConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(DescfetchConfig::default())
        }
    }
}

/// Load and validate a specific config file.
pub fn load_from(path: &Path) -> Result<DescfetchConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DescfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
