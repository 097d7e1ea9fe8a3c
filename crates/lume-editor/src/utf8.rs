//! UTF-8 boundary stepping over raw byte slices.
//!
//! Every cursor-moving operation goes through these functions so the caret
//! never lands inside a multi-byte code point. They are pure, allocation-free,
//! and total: malformed input degrades to single-byte steps instead of being
//! rejected. A buffer containing invalid sequences is still navigable, just at
//! byte granularity at the malformed point.
//!
//! Working on `&[u8]` rather than `&str` is deliberate — the gap buffer stores
//! bytes, and the permissive policy means we cannot assume validity here.

/// True for UTF-8 continuation bytes (`0b10xx_xxxx`).
#[inline]
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Encoded length of the code point starting with `byte`, per the standard
/// lead-byte patterns. Malformed leads (continuation bytes, `0xF8..`) count
/// as 1 so navigation always makes progress.
#[inline]
#[must_use]
pub const fn lead_len(byte: u8) -> usize {
    if byte < 0x80 {
        1
    } else if byte & 0xE0 == 0xC0 {
        2
    } else if byte & 0xF0 == 0xE0 {
        3
    } else if byte & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// Start of the code point preceding offset `i`.
///
/// Steps back one byte, then at most 3 more while sitting on continuation
/// bytes. Returns 0 when `i == 0`; an `i` past the end clamps to `text.len()`
/// first.
#[must_use]
pub fn prev_boundary(text: &[u8], i: usize) -> usize {
    let i = i.min(text.len());
    if i == 0 {
        return 0;
    }
    let mut j = i - 1;
    // A lead byte is at most 3 bytes behind the last continuation byte.
    let floor = j.saturating_sub(3);
    while j > floor && is_continuation(text[j]) {
        j -= 1;
    }
    j
}

/// Offset just past the code point starting at `i`, clamped to `text.len()`.
///
/// Reads the lead byte at `i` for the length; a truncated sequence at the end
/// of the slice clamps rather than overruns.
#[must_use]
pub fn next_boundary(text: &[u8], i: usize) -> usize {
    if i >= text.len() {
        return text.len();
    }
    (i + lead_len(text[i])).min(text.len())
}

/// Number of code points in `text` — the column metric.
///
/// Counts non-continuation bytes, which equals the scalar-value count for
/// valid UTF-8 and degrades sensibly (one "column" per malformed byte run
/// lead) otherwise.
#[must_use]
pub fn count_code_points(text: &[u8]) -> usize {
    text.iter().filter(|&&b| !is_continuation(b)).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
