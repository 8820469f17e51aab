//! `descfetch fetch` – download the descriptor document and emit it.

use anyhow::{Context, Result};
use descfetch_core::config::{self, DescfetchConfig};
use descfetch_core::descriptor::{self, Descriptor};
use descfetch_core::transport::CurlTransport;
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

pub async fn run_fetch(cfg: &DescfetchConfig, url: Option<&str>, output: Option<&Path>) -> Result<()> {
    let url = match url {
        Some(u) => {
            config::validate_url(u)?;
            u.to_string()
        }
        None => cfg.url.clone(),
    };
    tracing::info!("fetching descriptor from {}", url);

    let transport = CurlTransport::new(&cfg.http);
    let doc: Descriptor = tokio::task::spawn_blocking(move || {
        descriptor::fetch_descriptor(&transport, &url)
    })
    .await
    .context("fetch task join")??;

    match output {
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            descriptor::emit(&doc, &mut lock)?;
        }
        Some(path) => {
            write_output(&doc, path)?;
            tracing::info!("descriptor written to {}", path.display());
        }
    }
    Ok(())
}

/// Emit into a temp file next to `path`, then rename it over `path`.
/// `path` is either left as it was or fully replaced.
fn write_output(doc: &Descriptor, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    descriptor::emit(doc, tmp.as_file_mut())?;
    // Drop the temp file with the error so it is removed before exit.
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("rename into {}", path.display()))?;
    Ok(())
}
