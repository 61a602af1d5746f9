#![forbid(unsafe_code)]

//! # Amalgam
//!
//! Merge a primary header and the sources it includes into one
//! self-contained, distributable header.
//!
//! The primary file is split into three regions around two literal
//! boundaries (the `// INCLUDES` marker and the first blank line after it);
//! the include directives between them are replaced by filtered content
//! from the referenced files, and everything is reassembled in order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use amalgam::{amalgamate, DirSource};
//!
//! fn main() -> anyhow::Result<()> {
//!     let source = DirSource::new("src");
//!     let merged = amalgamate(&source, "sokol_input.h")?;
//!     std::fs::write("sokol_input.h", merged)?;
//!     Ok(())
//! }
//! ```

pub mod amalgamate;
pub mod commands;
pub mod config;
pub mod error;
pub mod expand;
pub mod section;
pub mod source;

// Re-exports
pub use amalgamate::amalgamate;
pub use config::Config;
pub use error::{AmalgamError, Result};
pub use expand::Expander;
pub use section::{sectionize, Sections};
pub use source::{DirSource, LineSource, MemSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
