//! Line sources
//!
//! File access for the pipeline behind a minimal capability: open a
//! relative path, get the file's lines in order. The expander only ever
//! talks to this trait, so the core logic runs against in-memory fixtures
//! in tests and against the real filesystem in the CLI.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{AmalgamError, Result};

/// Capability to read a file as ordered lines.
pub trait LineSource {
    /// Read the file at `path`, returning its lines in order with
    /// terminators stripped.
    fn lines(&self, path: &str) -> Result<Vec<String>>;
}

/// Reads files relative to a root directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl LineSource for DirSource {
    fn lines(&self, path: &str) -> Result<Vec<String>> {
        let full = self.root.join(path);
        let content = std::fs::read_to_string(&full).map_err(|source| AmalgamError::Resolution {
            path: full.clone(),
            source,
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

/// In-memory source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemSource {
    files: HashMap<String, String>,
}

impl MemSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `path`.
    pub fn insert(&mut self, path: &str, content: &str) -> &mut Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }
}

impl LineSource for MemSource {
    fn lines(&self, path: &str) -> Result<Vec<String>> {
        let content = self.files.get(path).ok_or_else(|| AmalgamError::Resolution {
            path: PathBuf::from(path),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such entry"),
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }
}
