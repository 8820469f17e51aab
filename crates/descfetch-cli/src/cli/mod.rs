//! CLI for the descriptor data loader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use descfetch_core::config::{self, DescfetchConfig};
use descfetch_core::descriptor::OUTPUT_FILE_NAME;
use std::path::{Path, PathBuf};

use commands::{run_completions, run_fetch, run_man, run_site_config};

/// Top-level CLI. With no subcommand, behaves like `descfetch fetch`.
#[derive(Debug, Parser)]
#[command(name = "descfetch", version)]
#[command(
    about = "Fetch the employment-indicator variable descriptions and emit them as compact JSON",
    long_about = None
)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the descriptor document and write it to stdout.
    Fetch {
        /// Fetch from this URL instead of the configured one.
        #[arg(long)]
        url: Option<String>,
        /// Write to this file instead of stdout (only on success).
        /// A bare `-o` writes `descripciones.json` in the current directory.
        #[arg(
            long,
            short,
            value_name = "PATH",
            num_args = 0..=1,
            default_missing_value = OUTPUT_FILE_NAME
        )]
        output: Option<PathBuf>,
    },

    /// Print the dashboard site configuration as JSON.
    SiteConfig,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a roff man page.
    Man,
}

fn load_config(path: Option<&Path>) -> Result<DescfetchConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            None => {
                let cfg = load_config(cli.config.as_deref())?;
                run_fetch(&cfg, None, None).await?
            }
            Some(CliCommand::Fetch { url, output }) => {
                let cfg = load_config(cli.config.as_deref())?;
                run_fetch(&cfg, url.as_deref(), output.as_deref()).await?
            }
            Some(CliCommand::SiteConfig) => {
                let cfg = load_config(cli.config.as_deref())?;
                run_site_config(&cfg)?
            }
            Some(CliCommand::Completions { shell }) => run_completions(shell)?,
            Some(CliCommand::Man) => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
