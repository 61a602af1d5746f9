//! Include expander
//!
//! Replaces the include directives of the directive block with content
//! pulled from the referenced files. Every referenced file is inlined as
//! the suffix that follows the private-header trigger line; the gamepad
//! sources themselves are additionally copied in full first, with their
//! internal gamepad includes stripped out.

use crate::error::Result;
use crate::source::LineSource;

/// Directive prefix that marks a line for expansion.
const INCLUDE_PREFIX: &str = "#include";

/// Prefix of include lines dropped from raw copies of the gamepad sources.
const GAMEPAD_INCLUDE_PREFIX: &str = "#include \"gamepad";

/// Cut point for suffix inlining; only lines after it are copied.
const SUFFIX_TRIGGER: &str = "#include \"gamepad/Gamepad_private.h\"";

/// Basenames inlined in full (gamepad includes stripped) ahead of their
/// trigger suffix.
const RAW_COPY_FILES: &[&str] = &["Gamepad.h", "Gamepad_private.h", "Gamepad_private.c"];

/// Expands include directives against a line source.
pub struct Expander<'a, S: LineSource> {
    source: &'a S,
}

impl<'a, S: LineSource> Expander<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Expand every directive-block line into `out`.
    ///
    /// Non-include lines pass through verbatim with a terminator appended;
    /// include lines are replaced by the referenced file's inlined content
    /// and never appear themselves.
    pub fn expand_into(&self, directives: &[String], out: &mut String) -> Result<()> {
        for line in directives {
            if line.starts_with(INCLUDE_PREFIX) {
                self.expand_include(line, out)?;
            } else {
                push_line(out, line);
            }
        }
        Ok(())
    }

    /// Inline one include directive.
    fn expand_include(&self, line: &str, out: &mut String) -> Result<()> {
        let path = include_path(line);
        tracing::debug!("expanding include: {}", path);

        if RAW_COPY_FILES.contains(&basename(path)) {
            self.copy_filtered(path, out)?;
        }
        self.copy_suffix(path, out)?;
        Ok(())
    }

    /// Copy the whole file, dropping its own gamepad includes.
    fn copy_filtered(&self, path: &str, out: &mut String) -> Result<()> {
        for line in self.source.lines(path)? {
            if !line.starts_with(GAMEPAD_INCLUDE_PREFIX) {
                push_line(out, &line);
            }
        }
        Ok(())
    }

    /// Copy everything after the trigger line; nothing when no trigger.
    ///
    /// Reads the file again from the start even when `copy_filtered` just
    /// consumed it; the two passes stay independent.
    fn copy_suffix(&self, path: &str, out: &mut String) -> Result<()> {
        let mut writing = false;
        for line in self.source.lines(path)? {
            if writing {
                push_line(out, &line);
            } else if line.trim_end() == SUFFIX_TRIGGER {
                writing = true;
            }
        }
        Ok(())
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Extract the quoted path from an include line: the last
/// whitespace-separated token, with its first and last characters (the
/// quote delimiters) stripped.
fn include_path(line: &str) -> &str {
    let token = line.split_whitespace().last().unwrap_or("");
    token
        .get(1..token.len().saturating_sub(1))
        .unwrap_or("")
}

/// Final `/`-separated segment of a path.
fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
