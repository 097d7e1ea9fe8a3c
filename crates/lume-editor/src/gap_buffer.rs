//! Gap buffer — the raw byte storage behind the editor.
//!
//! A `GapBuffer` keeps the text in one contiguous allocation with a movable
//! "gap" of free space inside it. Edits at the gap are O(1); an edit elsewhere
//! first slides the gap to the edit point, which costs one `copy_within` of
//! the bytes between the old and new gap position. Since consecutive edits
//! cluster around the caret, the gap rarely moves far and local typing stays
//! cheap.
//!
//! # Layout
//!
//! ```text
//! byte:      0        gap_lo       gap_hi        capacity
//!            │  head  │////  gap  ////│   tail   │
//! ```
//!
//! Logical content is `head ++ tail`; the gap `[gap_lo, gap_hi)` holds no
//! valid bytes. Invariant: `gap_lo <= gap_hi <= capacity`.
//!
//! # Design choices
//!
//! - **Clamping, not errors.** Out-of-range positions clamp to the logical
//!   length and oversized erase lengths clamp to the remaining content. Every
//!   operation is total; there is no error type in this module.
//!
//! - **Bytes, not chars.** The buffer neither knows nor enforces UTF-8; the
//!   [`utf8`](crate::utf8) helpers keep the caret on code-point boundaries
//!   one layer up. This is what lets navigation degrade gracefully on
//!   malformed input instead of refusing it.
//!
//! - **Explicit materialization cache.** [`content`](GapBuffer::content)
//!   linearizes the two regions into a `String` and keeps it until the next
//!   mutation (`None` = stale). The line index and boundary scans read the
//!   same snapshot for free between edits.

/// Extra free space added beyond the shortfall when the store grows.
const GROWTH_SLACK: usize = 32;

/// Gap size for an empty buffer, and the minimum slack reserved past the
/// initial content when constructing from text.
const INITIAL_GAP: usize = 64;

/// A byte buffer with a movable gap at the edit point.
pub struct GapBuffer {
    buf: Vec<u8>,
    /// First byte of the gap. Also the byte length of the head region.
    gap_lo: usize,
    /// First byte past the gap.
    gap_hi: usize,
    /// Linearized content, `None` when a mutation has made it stale.
    cache: Option<String>,
}

impl GapBuffer {
    // -- Construction -------------------------------------------------------

    /// Create an empty buffer. The whole store is gap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0; INITIAL_GAP],
            gap_lo: 0,
            gap_hi: INITIAL_GAP,
            cache: None,
        }
    }

    /// Create a buffer holding `text`, with the gap placed after it.
    ///
    /// The store is sized at twice the text plus slack, so early edits near
    /// the end (the common case when opening a file and typing) fit without
    /// an immediate regrow.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let cap = text.len() * 2 + INITIAL_GAP;
        let mut buf = vec![0; cap];
        buf[..text.len()].copy_from_slice(text.as_bytes());
        Self {
            buf,
            gap_lo: text.len(),
            gap_hi: cap,
            cache: None,
        }
    }

    // -- Size ---------------------------------------------------------------

    /// Logical content length in bytes, excluding the gap.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len() - (self.gap_hi - self.gap_lo)
    }

    /// True when the buffer holds no content.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn gap_len(&self) -> usize {
        self.gap_hi - self.gap_lo
    }

    // -- Reading ------------------------------------------------------------

    /// The two non-gap regions, in logical order, zero-copy.
    ///
    /// Concatenating them yields the exact content bytes. This is the path
    /// for byte-for-byte persistence; [`content`](Self::content) is the
    /// string view.
    #[inline]
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        (&self.buf[..self.gap_lo], &self.buf[self.gap_hi..])
    }

    /// The full content as a string slice.
    ///
    /// Lazily materialized and cached until the next mutation, so repeated
    /// reads between edits (index rebuild, boundary scans, rendering) share
    /// one linearization. Invalid UTF-8 — only reachable by inserting raw
    /// bytes — is replaced lossily in the string view; `as_slices` stays
    /// exact.
    pub fn content(&mut self) -> &str {
        if self.cache.is_none() {
            let (head, tail) = (&self.buf[..self.gap_lo], &self.buf[self.gap_hi..]);
            let mut bytes = Vec::with_capacity(head.len() + tail.len());
            bytes.extend_from_slice(head);
            bytes.extend_from_slice(tail);
            let text = match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
            };
            self.cache = Some(text);
        }
        self.cache.as_deref().unwrap_or_default()
    }

    // -- Editing ------------------------------------------------------------

    /// Insert `bytes` at byte position `pos`.
    ///
    /// `pos` clamps to `[0, len()]`. The gap slides to `pos` (O(distance)),
    /// grows if it cannot hold `bytes`, then the bytes are copied in and
    /// `gap_lo` advances. An empty `bytes` is a no-op.
    pub fn insert(&mut self, pos: usize, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let pos = pos.min(self.len());
        self.move_gap_to(pos);
        self.ensure_gap(bytes.len());
        self.buf[self.gap_lo..self.gap_lo + bytes.len()].copy_from_slice(bytes);
        self.gap_lo += bytes.len();
        self.cache = None;
    }

    /// Delete `len` bytes starting at byte position `pos`.
    ///
    /// `pos` clamps to `[0, len()]` and `len` clamps to the remaining
    /// content. The gap slides to `pos` and then swallows the deleted run by
    /// extending `gap_hi` — no bytes are copied for the deletion itself.
    pub fn erase(&mut self, pos: usize, len: usize) {
        let pos = pos.min(self.len());
        let len = len.min(self.len() - pos);
        if len == 0 {
            return;
        }
        self.move_gap_to(pos);
        self.gap_hi += len;
        self.cache = None;
    }

    // -- Gap management -----------------------------------------------------

    /// Slide the gap so that `gap_lo == pos`.
    ///
    /// Moving left shifts the block `[pos, gap_lo)` right to the tail of the
    /// gap; moving right shifts `[gap_hi, gap_hi + count)` left to `gap_lo`.
    /// One contiguous move either way, O(distance moved).
    fn move_gap_to(&mut self, pos: usize) {
        if pos == self.gap_lo {
            return;
        }
        if pos < self.gap_lo {
            let count = self.gap_lo - pos;
            self.buf.copy_within(pos..self.gap_lo, self.gap_hi - count);
            self.gap_lo = pos;
            self.gap_hi -= count;
        } else {
            let count = pos - self.gap_lo;
            self.buf.copy_within(self.gap_hi..self.gap_hi + count, self.gap_lo);
            self.gap_lo += count;
            self.gap_hi += count;
        }
        debug_assert!(self.gap_lo <= self.gap_hi);
    }

    /// Grow the store until the gap holds at least `want` free bytes.
    ///
    /// New capacity doubles, or covers the shortfall plus slack, whichever is
    /// larger. Both content regions are copied byte-for-byte into the fresh
    /// store with the regrown gap between them, at the same logical position.
    fn ensure_gap(&mut self, want: usize) {
        if self.gap_len() >= want {
            return;
        }
        let old_cap = self.buf.len();
        let shortfall = want - self.gap_len();
        let new_cap = (old_cap * 2).max(old_cap + shortfall + GROWTH_SLACK);

        let mut fresh = vec![0; new_cap];
        fresh[..self.gap_lo].copy_from_slice(&self.buf[..self.gap_lo]);
        let tail_len = old_cap - self.gap_hi;
        let new_hi = new_cap - tail_len;
        fresh[new_hi..].copy_from_slice(&self.buf[self.gap_hi..]);

        self.buf = fresh;
        self.gap_hi = new_hi;
        self.cache = None;
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GapBuffer")
            .field("len", &self.len())
            .field("gap_lo", &self.gap_lo)
            .field("gap_hi", &self.gap_hi)
            .field("capacity", &self.buf.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
