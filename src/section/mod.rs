//! Sectionizer
//!
//! Splits the primary header into its three regions: the prologue before
//! the `// INCLUDES` marker, the directive block of include lines after it,
//! and the epilogue following the first blank line of the block.

/// Marker line separating the prologue from the directive block.
pub const INCLUDES_MARKER: &str = "// INCLUDES";

/// The three regions of a primary file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub prologue: Vec<String>,
    pub directives: Vec<String>,
    pub epilogue: Vec<String>,
}

/// Classifier state while scanning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Prologue,
    DirectiveBlock,
    Epilogue,
}

/// True for the exact region marker line.
fn is_includes_marker(line: &str) -> bool {
    line == INCLUDES_MARKER
}

/// True for empty or whitespace-only lines.
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Partition `lines` into the three regions.
///
/// The marker line and the first blank line after it are consumed by the
/// split and belong to no region. A file without the marker is all
/// prologue; a file without a blank line after the marker keeps the whole
/// remainder in the directive block. Neither case is an error.
pub fn sectionize<I>(lines: I) -> Sections
where
    I: IntoIterator<Item = String>,
{
    let mut sections = Sections::default();
    let mut state = State::Prologue;

    for line in lines {
        state = match state {
            State::Prologue => {
                if is_includes_marker(&line) {
                    State::DirectiveBlock
                } else {
                    sections.prologue.push(line);
                    State::Prologue
                }
            }
            State::DirectiveBlock => {
                if is_blank(&line) {
                    State::Epilogue
                } else {
                    sections.directives.push(line);
                    State::DirectiveBlock
                }
            }
            State::Epilogue => {
                sections.epilogue.push(line);
                State::Epilogue
            }
        };
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sectionize_partitions_around_markers() {
        let input = lines(&[
            "#ifndef HEADER_H",
            "#define HEADER_H",
            "// INCLUDES",
            "#include \"a.h\"",
            "#include \"b.h\"",
            "",
            "static int x;",
            "#endif",
        ]);
        let sections = sectionize(input.clone());

        assert_eq!(
            sections.prologue,
            lines(&["#ifndef HEADER_H", "#define HEADER_H"])
        );
        assert_eq!(
            sections.directives,
            lines(&["#include \"a.h\"", "#include \"b.h\""])
        );
        assert_eq!(sections.epilogue, lines(&["static int x;", "#endif"]));

        // Reassembling the regions with the consumed boundary lines gives
        // back the original file, with nothing duplicated or lost.
        let mut rebuilt = sections.prologue.clone();
        rebuilt.push(INCLUDES_MARKER.to_string());
        rebuilt.extend(sections.directives.clone());
        rebuilt.push(String::new());
        rebuilt.extend(sections.epilogue.clone());
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_sectionize_without_marker_is_all_prologue() {
        let input = lines(&["a", "", "b", "c"]);
        let sections = sectionize(input.clone());

        assert_eq!(sections.prologue, input);
        assert!(sections.directives.is_empty());
        assert!(sections.epilogue.is_empty());
    }

    #[test]
    fn test_sectionize_without_blank_keeps_remainder_in_directives() {
        let sections = sectionize(lines(&["top", "// INCLUDES", "#include \"a.h\"", "tail"]));

        assert_eq!(sections.prologue, lines(&["top"]));
        assert_eq!(sections.directives, lines(&["#include \"a.h\"", "tail"]));
        assert!(sections.epilogue.is_empty());
    }

    #[test]
    fn test_sectionize_whitespace_only_line_ends_directives() {
        let sections = sectionize(lines(&["// INCLUDES", "#include \"a.h\"", "   \t", "tail"]));

        assert_eq!(sections.directives, lines(&["#include \"a.h\""]));
        assert_eq!(sections.epilogue, lines(&["tail"]));
    }

    #[test]
    fn test_sectionize_epilogue_keeps_blank_lines() {
        let sections = sectionize(lines(&["// INCLUDES", "x", "", "a", "", "b", ""]));

        assert_eq!(sections.epilogue, lines(&["a", "", "b", ""]));
    }

    #[test]
    fn test_sectionize_marker_must_match_exactly() {
        // Indented or decorated variants do not open the directive block.
        let sections = sectionize(lines(&["  // INCLUDES", "// INCLUDES!", "body"]));

        assert_eq!(sections.prologue.len(), 3);
        assert!(sections.directives.is_empty());
    }
}
