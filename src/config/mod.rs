//! Configuration
//!
//! Optional project configuration: where the sources live and where the
//! merged header goes. A missing file or missing keys fall back to the
//! layout the generator was built around.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "amalgam.config.json";

fn default_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_primary() -> String {
    "sokol_input.h".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("sokol_input.h")
}

/// Tool configuration, read from `amalgam.config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the primary file and include paths resolve against
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Primary header, relative to `root`
    #[serde(default = "default_primary")]
    pub primary: String,

    /// Merged output path
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            primary: default_primary(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default location or fall back to defaults
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH).unwrap_or_default()
    }
}
