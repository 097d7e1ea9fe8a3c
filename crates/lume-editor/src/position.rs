//! The `(line, col)` position type.
//!
//! All coordinates are **0-indexed**. Line 0 is the first line, column 0 the
//! first character. Columns count Unicode code points, not bytes — for the
//! line `"café"`, column 3 is `'é'` and column 4 is the caret-after-last-char
//! position. Byte offsets are the editor's internal currency and never appear
//! here; `Position` is what read accessors hand to status lines and renderers.
//!
//! Display layers should convert to 1-indexed for the user — that conversion
//! never belongs here.

use std::fmt;

/// A position in the text: (line, column), both 0-indexed.
///
/// Ordered lexicographically, line first: `Position { line: 0, col: 5 }` <
/// `Position { line: 1, col: 0 }`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// The origin — line 0, column 0.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line.cmp(&other.line).then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed for human display.
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_origin() {
        assert_eq!(Position::ZERO, Position::new(0, 0));
    }

    #[test]
    fn ordering_is_line_first() {
        assert!(Position::new(0, 100) < Position::new(1, 0));
        assert!(Position::new(1, 3) < Position::new(1, 7));
        assert_eq!(Position::new(3, 3), Position::new(3, 3));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Position::new(2, 5)), "Pos(2:5)");
    }

    #[test]
    fn display_is_1_indexed() {
        assert_eq!(format!("{}", Position::new(0, 0)), "1:1");
        assert_eq!(format!("{}", Position::new(9, 14)), "10:15");
    }
}
