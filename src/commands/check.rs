//! Check command
//!
//! Regenerates the merged header in memory and compares it with the file on
//! disk, reporting a unified diff when they disagree.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;
use similar::TextDiff;

use crate::amalgamate::amalgamate;
use crate::config::Config;
use crate::source::DirSource;

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Source root directory (overrides config)
    pub root: Option<PathBuf>,
    /// Primary header, relative to the root (overrides config)
    pub primary: Option<String>,
    /// Output path (overrides config)
    pub output: Option<PathBuf>,
}

/// Execute the check command
pub fn execute_check(options: CheckOptions, config: Config) -> Result<()> {
    let root = options.root.unwrap_or(config.root);
    let primary = options.primary.unwrap_or(config.primary);
    let output = options.output.unwrap_or(config.output);

    let source = DirSource::new(&root);
    let expected = amalgamate(&source, &primary)?;

    let actual = std::fs::read_to_string(&output)
        .with_context(|| format!("cannot read {}; run generate first", output.display()))?;

    if actual == expected {
        println!("{} {} is up to date", style("✓").green(), output.display());
        return Ok(());
    }

    eprintln!("{} {} is out of date", style("✗").red(), output.display());
    let diff = TextDiff::from_lines(actual.as_str(), expected.as_str());
    eprint!(
        "{}",
        diff.unified_diff()
            .context_radius(3)
            .header("on disk", "regenerated")
    );
    bail!("stale output: {}", output.display())
}
