//! CLI command handlers. Each command is in its own file.

mod completions;
mod fetch;
mod site_config;

pub use completions::{run_completions, run_man};
pub use fetch::run_fetch;
pub use site_config::run_site_config;
