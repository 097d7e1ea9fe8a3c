//! # lume-editor — the lume editing engine
//!
//! An in-memory, mutable text-editing core: gap-buffer storage, a derived
//! line index, and UTF-8-aware caret/viewport navigation. Shells (input
//! loops, renderers, scripting bridges) live outside this crate and drive it
//! through [`editor::Editor`].
//!
//! - **[`gap_buffer`]** — byte storage with a movable gap at the edit point
//! - **[`line_index`]** — line-start offsets, line/column lookups
//! - **[`utf8`]** — code-point boundary stepping over raw bytes
//! - **[`position`]** — the `(line, col)` value type, 0-indexed
//! - **[`editor`]** — the session: caret, goal column, viewport, save

pub mod editor;
pub mod gap_buffer;
pub mod line_index;
pub mod position;
pub mod utf8;
