//! Generate command
//!
//! Runs the amalgamation pipeline and writes the merged header.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::amalgamate::amalgamate;
use crate::config::Config;
use crate::source::DirSource;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Source root directory (overrides config)
    pub root: Option<PathBuf>,
    /// Primary header, relative to the root (overrides config)
    pub primary: Option<String>,
    /// Output path (overrides config)
    pub output: Option<PathBuf>,
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: Config) -> Result<()> {
    let root = options.root.unwrap_or(config.root);
    let primary = options.primary.unwrap_or(config.primary);
    let output = options.output.unwrap_or(config.output);

    let source = DirSource::new(&root);
    let merged = amalgamate(&source, &primary)?;
    std::fs::write(&output, &merged)?;

    println!(
        "{} Wrote {} ({} lines)",
        style("✓").green(),
        output.display(),
        merged.lines().count()
    );

    Ok(())
}
