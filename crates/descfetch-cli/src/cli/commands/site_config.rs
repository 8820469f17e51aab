//! `descfetch site-config` – print the dashboard settings.

use anyhow::Result;
use descfetch_core::config::DescfetchConfig;

pub fn run_site_config(cfg: &DescfetchConfig) -> Result<()> {
    println!("{}", cfg.site.to_json()?);
    Ok(())
}
