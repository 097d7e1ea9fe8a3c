//! Editor session — caret, goal column, viewport, and persistence over one
//! buffer.
//!
//! An `Editor` owns a [`GapBuffer`] and the [`LineIndex`] derived from it,
//! plus the caret (a byte offset into the logical text), the goal column for
//! vertical movement, the viewport's top line, and an optional backing file
//! path. This is the whole engine surface: input shells translate key events
//! into these calls, renderers read the viewport accessors back out.
//!
//! # Update discipline
//!
//! Every mutating call edits the gap buffer and then rebuilds the line index
//! from the fresh snapshot before returning — the index is never stale when a
//! navigation call reads it. Navigation never touches storage; it only maps
//! the caret through the index and the [`utf8`] boundary helpers, so the
//! caret cannot end up inside a multi-byte code point.
//!
//! # Goal column
//!
//! Vertical movement remembers the column the caret is aiming for, so
//! repeated up/down motion tracks a consistent horizontal position through
//! shorter lines. Horizontal moves set the goal to the caret's new column;
//! mutations reset it to the unset sentinel so the next vertical move
//! recomputes from where the caret actually is.
//!
//! # Viewport
//!
//! `top_line` is the first visible line. Moving up past it pulls it up
//! immediately (the caret must never sit above the viewport); every other
//! movement leaves scrolling to [`keep_visible`](Editor::keep_visible), which
//! the shell calls after each caret move with its current geometry.

use std::fs;
use std::io::{self, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use unicode_width::UnicodeWidthChar;

use crate::gap_buffer::GapBuffer;
use crate::line_index::LineIndex;
use crate::position::Position;
use crate::utf8;

/// Sentinel for "no remembered column"; the next vertical move resolves it
/// from the caret.
const GOAL_UNSET: usize = usize::MAX;

/// One open text, its caret, and its viewport.
pub struct Editor {
    buf: GapBuffer,
    index: LineIndex,
    /// Byte offset of the insertion point, `0 ..= buf.len()`, always on a
    /// code-point boundary.
    caret: usize,
    /// Remembered column for vertical movement; `GOAL_UNSET` when stale.
    goal_col: usize,
    /// First visible line.
    top_line: usize,
    /// Backing file, `None` for an unsaved scratch text.
    path: Option<PathBuf>,
    /// True when edited since the last successful save (or creation).
    modified: bool,
}

impl Editor {
    // -- Construction -------------------------------------------------------

    /// Create a session over `initial_text`, optionally tied to a file path.
    /// The caret starts at offset 0 and the text counts as unmodified.
    #[must_use]
    pub fn new(initial_text: &str, path: Option<PathBuf>) -> Self {
        let mut editor = Self {
            buf: GapBuffer::from_text(initial_text),
            index: LineIndex::new(),
            caret: 0,
            goal_col: GOAL_UNSET,
            top_line: 0,
            path,
            modified: false,
        };
        editor.rebuild_index();
        editor
    }

    /// Load a session from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::new(&text, Some(path.to_path_buf())))
    }

    // -- Mutation -----------------------------------------------------------

    /// Insert `text` at the caret and advance the caret past it.
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.buf.insert(self.caret, text.as_bytes());
        self.caret += text.len();
        self.after_edit();
    }

    /// Delete the code point ending at the caret (Backspace). No-op at the
    /// start of the text.
    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        let prev = utf8::prev_boundary(self.buf.content().as_bytes(), self.caret);
        self.buf.erase(prev, self.caret - prev);
        self.caret = prev;
        self.after_edit();
    }

    /// Delete the code point starting at the caret (Delete). No-op at the
    /// end of the text. The caret does not move.
    pub fn delete_forward(&mut self) {
        if self.caret >= self.buf.len() {
            return;
        }
        let next = utf8::next_boundary(self.buf.content().as_bytes(), self.caret);
        self.buf.erase(self.caret, next - self.caret);
        self.after_edit();
    }

    /// Post-edit bookkeeping shared by every mutating call.
    fn after_edit(&mut self) {
        self.modified = true;
        self.goal_col = GOAL_UNSET;
        self.rebuild_index();
    }

    /// Rebuild the line index from the current content and re-clamp the
    /// caret, which may now point past a shrunken text.
    fn rebuild_index(&mut self) {
        self.index.rebuild(self.buf.content().as_bytes());
        self.caret = self.caret.min(self.buf.len());
    }

    // -- Horizontal movement ------------------------------------------------

    /// Step the caret one code point left. No-op at offset 0.
    pub fn move_left(&mut self) {
        if self.caret == 0 {
            return;
        }
        let text = self.buf.content().as_bytes();
        self.caret = utf8::prev_boundary(text, self.caret);
        self.goal_col = self.index.column_of(text, self.caret);
    }

    /// Step the caret one code point right. No-op at the end of the text.
    pub fn move_right(&mut self) {
        if self.caret >= self.buf.len() {
            return;
        }
        let text = self.buf.content().as_bytes();
        self.caret = utf8::next_boundary(text, self.caret);
        self.goal_col = self.index.column_of(text, self.caret);
    }

    /// Snap the caret to the first byte of its line.
    pub fn move_home(&mut self) {
        let line = self.index.line_of(self.caret);
        self.caret = self.index.line_start(line);
        self.goal_col = 0;
    }

    /// Snap the caret to the last byte of its line (before the `'\n'`, or
    /// the end of the text on the final line).
    pub fn move_end(&mut self) {
        let line = self.index.line_of(self.caret);
        self.caret = self.index.line_span(line, self.buf.len()).end;
        let text = self.buf.content().as_bytes();
        self.goal_col = self.index.column_of(text, self.caret);
    }

    // -- Vertical movement --------------------------------------------------

    /// Move the caret one line up, tracking the goal column. No-op on the
    /// first line. Pulls `top_line` up when the caret crosses it.
    pub fn move_up(&mut self) {
        let line = self.index.line_of(self.caret);
        if line == 0 {
            return;
        }
        let text = self.buf.content().as_bytes();
        if self.goal_col == GOAL_UNSET {
            self.goal_col = self.index.column_of(text, self.caret);
        }
        self.caret = self.index.byte_at_col(text, line - 1, self.goal_col);
        if line - 1 < self.top_line {
            self.top_line = line - 1;
        }
    }

    /// Move the caret one line down, tracking the goal column. No-op on the
    /// last line. Never scrolls — that is `keep_visible`'s job.
    pub fn move_down(&mut self) {
        let line = self.index.line_of(self.caret);
        if line + 1 >= self.index.line_count() {
            return;
        }
        let text = self.buf.content().as_bytes();
        if self.goal_col == GOAL_UNSET {
            self.goal_col = self.index.column_of(text, self.caret);
        }
        self.caret = self.index.byte_at_col(text, line + 1, self.goal_col);
    }

    // -- Viewport -----------------------------------------------------------

    /// Scroll `top_line` so the caret's line sits at least `margin` lines
    /// inside a viewport of `height` lines.
    ///
    /// Standard scroll-margin rule: a caret within `margin` of the top pulls
    /// the viewport up (clamped at line 0); within `margin` of the bottom,
    /// pushes it down so the caret lands `margin` lines above the bottom
    /// edge.
    pub fn keep_visible(&mut self, height: usize, margin: usize) {
        let line = self.index.line_of(self.caret);
        if line < self.top_line + margin {
            self.top_line = line.saturating_sub(margin);
        }
        if margin < height && line >= self.top_line + height - margin {
            self.top_line = line - (height - margin - 1);
        }
    }

    /// First visible line.
    #[inline]
    #[must_use]
    pub const fn top_line(&self) -> usize {
        self.top_line
    }

    /// Byte ranges of the lines visible in a viewport of `height` lines,
    /// from `top_line`, each excluding its trailing `'\n'`. The renderer
    /// slices these out of [`content`](Self::content) to draw.
    pub fn visible_line_ranges(&self, height: usize) -> impl Iterator<Item = Range<usize>> + '_ {
        let text_len = self.buf.len();
        let count = self.index.line_count();
        let first = self.top_line.min(count);
        let last = self.top_line.saturating_add(height).min(count);
        (first..last).map(move |line| self.index.line_span(line, text_len))
    }

    // -- Read access --------------------------------------------------------

    /// Caret byte offset into the logical text.
    #[inline]
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Caret as a `(line, column)` position; the column counts code points.
    pub fn position(&mut self) -> Position {
        let line = self.index.line_of(self.caret);
        let col = self.index.column_of(self.buf.content().as_bytes(), self.caret);
        Position::new(line, col)
    }

    /// Display column of the caret for a renderer: tabs expand to the next
    /// `tab_width` stop and wide characters (CJK) count two columns.
    pub fn caret_display_col(&mut self, tab_width: usize) -> usize {
        let tab = tab_width.max(1);
        let start = self.index.line_start(self.index.line_of(self.caret));
        let caret = self.caret;
        let text = self.buf.content();
        let mut col = 0;
        for ch in text.get(start..caret).unwrap_or("").chars() {
            if ch == '\t' {
                col = (col / tab + 1) * tab;
            } else {
                col += UnicodeWidthChar::width(ch).unwrap_or(0);
            }
        }
        col
    }

    /// Number of lines. Always >= 1.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    /// The full materialized text.
    pub fn content(&mut self) -> &str {
        self.buf.content()
    }

    /// True when edited since the last successful save.
    #[inline]
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    // -- Persistence --------------------------------------------------------

    /// The backing file path, if any.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Set or replace the backing file path.
    #[inline]
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    /// Write the content to the backing path, byte for byte.
    ///
    /// Returns `false` without touching the filesystem when no path is set,
    /// and `false` on any write error — the caller decides whether to prompt
    /// for a path or retry. A direct overwrite: no trailing newline added,
    /// no line-ending translation, no atomic rename.
    pub fn save(&mut self) -> bool {
        let Some(path) = self.path.clone() else {
            return false;
        };
        match self.write_to(&path) {
            Ok(()) => {
                self.modified = false;
                true
            }
            Err(_) => false,
        }
    }

    /// Store `path` as the backing file, then save to it.
    pub fn save_as(&mut self, path: PathBuf) -> bool {
        self.path = Some(path);
        self.save()
    }

    fn write_to(&self, path: &Path) -> io::Result<()> {
        // Write the two gap-buffer regions directly; no linearization and
        // exact bytes even if raw inserts produced invalid UTF-8.
        let (head, tail) = self.buf.as_slices();
        let mut file = fs::File::create(path)?;
        file.write_all(head)?;
        file.write_all(tail)?;
        Ok(())
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new("", None)
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("caret", &self.caret)
            .field("lines", &self.index.line_count())
            .field("top_line", &self.top_line)
            .field("modified", &self.modified)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
