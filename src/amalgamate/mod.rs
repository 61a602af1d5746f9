//! Amalgamation pipeline
//!
//! Composes the sectionizer and the include expander over a line source and
//! produces the merged header as one fully buffered string; nothing is
//! written to disk here.

use crate::error::Result;
use crate::expand::Expander;
use crate::section::sectionize;
use crate::source::LineSource;

/// Merge `primary` and the includes of its directive block into a single
/// header.
///
/// The output keeps the prologue and epilogue verbatim around the expanded
/// directive block. Prologue lines are joined with single terminators, the
/// block's lines each carry one, and the epilogue is preceded by one blank
/// separator line and ends without a trailing newline.
pub fn amalgamate<S: LineSource>(source: &S, primary: &str) -> Result<String> {
    let lines: Vec<String> = source
        .lines(primary)?
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    let sections = sectionize(lines);
    tracing::debug!(
        "sectioned {}: {} prologue / {} directive / {} epilogue lines",
        primary,
        sections.prologue.len(),
        sections.directives.len(),
        sections.epilogue.len()
    );

    let mut out = String::new();
    out.push_str(&sections.prologue.join("\n"));
    out.push('\n');

    Expander::new(source).expand_into(&sections.directives, &mut out)?;

    out.push('\n');
    out.push_str(&sections.epilogue.join("\n"));
    Ok(out)
}
