//! Commands
//!
//! CLI command implementations. Each command is in its own submodule.

pub mod check;
pub mod generate;
pub mod init;

pub use check::{execute_check, CheckOptions};
pub use generate::{execute_generate, GenerateOptions};
pub use init::{execute_init, InitOptions};
