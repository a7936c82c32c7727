//! Core types used throughout the project.

use std::fmt;

/// A position in source code (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePosition {
    pub line: u32,
    pub character: u32,
}

impl From<tree_sitter::Point> for SourcePosition {
    #[allow(clippy::cast_possible_truncation)] // ソースファイルの行・列が42億を超えることはない
    fn from(point: tree_sitter::Point) -> Self {
        Self { line: point.row as u32, character: point.column as u32 }
    }
}

/// Displays as `line:column`, 1-based, the way editors and compilers report it.
impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line.saturating_add(1), self.character.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    const fn pos(line: u32, character: u32) -> SourcePosition {
        SourcePosition { line, character }
    }

    #[rstest]
    #[case::origin(pos(0, 0), "1:1")]
    #[case::later(pos(9, 4), "10:5")]
    fn test_display_is_one_based(#[case] position: SourcePosition, #[case] expected: &str) {
        assert_that!(position.to_string(), eq(expected));
    }

    #[rstest]
    fn test_from_point() {
        let point = tree_sitter::Point { row: 3, column: 7 };

        assert_that!(SourcePosition::from(point), eq(pos(3, 7)));
    }

    #[rstest]
    fn test_ordering_is_line_major() {
        assert!(pos(1, 9) < pos(2, 0));
        assert!(pos(2, 0) < pos(2, 1));
    }
}
