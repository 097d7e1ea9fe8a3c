//! Line index — line-start byte offsets derived from the buffer content.
//!
//! The gap buffer knows nothing about lines, so the editor keeps this small
//! derived structure beside it: one byte offset per line start, rebuilt in a
//! single O(n) pass after every mutation. Offset 0 is always present; every
//! other entry is the byte immediately after a `'\n'`. A buffer that ends
//! with `'\n'` therefore has a trailing empty line, matching how editors
//! display files.
//!
//! An index is only valid for the exact text snapshot it was built from.
//! The session rebuilds it synchronously after each edit; lookups between
//! rebuilds are read-only and cheap (binary search or a short forward walk).
//!
//! Columns here are **code-point counts**, not byte offsets — column 3 of
//! `"café"` is `'é'`, not a byte in the middle of its encoding. The lookup
//! functions take the text as a parameter rather than holding a reference,
//! keeping the index a plain value type (same shape as the cursor/buffer
//! split: the caller owns the snapshot).

use std::ops::Range;

use crate::utf8;

/// Byte offsets of line starts, always at least `[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    /// An index for empty text: one line starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self { starts: vec![0] }
    }

    /// Rebuild from a text snapshot. O(n) single pass.
    pub fn rebuild(&mut self, text: &[u8]) {
        self.starts.clear();
        self.starts.push(0);
        for (i, &byte) in text.iter().enumerate() {
            if byte == b'\n' {
                self.starts.push(i + 1);
            }
        }
    }

    /// Number of lines. Always >= 1, even for empty text.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// The line containing byte offset `byte` — the greatest line whose start
    /// is `<= byte`. Defined for any `byte` in `[0, text.len()]`; offsets past
    /// the end resolve to the last line.
    #[must_use]
    pub fn line_of(&self, byte: usize) -> usize {
        // starts[0] == 0, so the partition point is never 0.
        self.starts.partition_point(|&start| start <= byte) - 1
    }

    /// Byte offset of the start of `line`, clamped to the last line.
    #[must_use]
    pub fn line_start(&self, line: usize) -> usize {
        self.starts[line.min(self.starts.len() - 1)]
    }

    /// Byte range of `line` excluding its trailing `'\n'`, clamped to the
    /// last line. `text_len` bounds the final line, which has no newline
    /// sentinel after it.
    #[must_use]
    pub fn line_span(&self, line: usize, text_len: usize) -> Range<usize> {
        let line = line.min(self.starts.len() - 1);
        let start = self.starts[line];
        let end = match self.starts.get(line + 1) {
            Some(&next) => next - 1,
            None => text_len,
        };
        start..end
    }

    /// Column of byte offset `byte` — code points from its line's start.
    #[must_use]
    pub fn column_of(&self, text: &[u8], byte: usize) -> usize {
        let byte = byte.min(text.len());
        let start = self.starts[self.line_of(byte)];
        utf8::count_code_points(&text[start..byte])
    }

    /// Byte offset of column `col` on `line`.
    ///
    /// Walks forward from the line start, one code point per column, stopping
    /// early at the end of the line or of the text — an oversized `col`
    /// clamps to the line's end, never spilling onto the next line.
    #[must_use]
    pub fn byte_at_col(&self, text: &[u8], line: usize, col: usize) -> usize {
        let mut i = self.line_start(line).min(text.len());
        for _ in 0..col {
            if i >= text.len() || text[i] == b'\n' {
                break;
            }
            i = utf8::next_boundary(text, i);
        }
        i
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
