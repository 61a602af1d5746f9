//! Init command
//!
//! Writes a default config scaffold.

use std::path::Path;

use anyhow::{bail, Result};
use console::style;

use crate::config::{Config, DEFAULT_CONFIG_PATH};

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Overwrite an existing config
    pub force: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if path.exists() && !options.force {
        eprintln!(
            "{} {} already exists (use --force to overwrite)",
            style("✗").red(),
            DEFAULT_CONFIG_PATH
        );
        bail!("config already exists");
    }

    Config::default().save(path)?;
    println!("{} Wrote {}", style("✓").green(), DEFAULT_CONFIG_PATH);
    Ok(())
}
