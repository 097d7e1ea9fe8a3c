//! End-to-end engine tests: random edit sequences replayed against a plain
//! `String` reference, and real-filesystem persistence.

use pretty_assertions::assert_eq;

use lume_editor::editor::Editor;

// ---------------------------------------------------------------------------
// Reference model
// ---------------------------------------------------------------------------

/// The trivially-correct implementation the engine must agree with: a plain
/// string spliced at a char-boundary caret.
#[derive(Default)]
struct Reference {
    text: String,
    caret: usize,
}

impl Reference {
    fn insert(&mut self, s: &str) {
        self.text.insert_str(self.caret, s);
        self.caret += s.len();
    }

    fn backspace(&mut self) {
        if let Some((prev, _)) = self.text[..self.caret].char_indices().last() {
            self.text.remove(prev);
            self.caret = prev;
        }
    }

    fn delete_forward(&mut self) {
        if self.caret < self.text.len() {
            self.text.remove(self.caret);
        }
    }

    fn left(&mut self) {
        if let Some((prev, _)) = self.text[..self.caret].char_indices().last() {
            self.caret = prev;
        }
    }

    fn right(&mut self) {
        if let Some(ch) = self.text[self.caret..].chars().next() {
            self.caret += ch.len_utf8();
        }
    }
}

#[derive(Debug, Clone)]
enum Op {
    Insert(String),
    Backspace,
    DeleteForward,
    Left,
    Right,
}

fn apply(ed: &mut Editor, reference: &mut Reference, op: &Op) {
    match op {
        Op::Insert(s) => {
            ed.insert_text(s);
            reference.insert(s);
        }
        Op::Backspace => {
            ed.backspace();
            reference.backspace();
        }
        Op::DeleteForward => {
            ed.delete_forward();
            reference.delete_forward();
        }
        Op::Left => {
            ed.move_left();
            reference.left();
        }
        Op::Right => {
            ed.move_right();
            reference.right();
        }
    }
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            // Mixed ASCII, multi-byte, and newlines — the cases that bend
            // byte/column bookkeeping.
            3 => "[abé漢😀\n]{0,4}".prop_map(Op::Insert),
            1 => Just(Op::Backspace),
            1 => Just(Op::DeleteForward),
            1 => Just(Op::Left),
            1 => Just(Op::Right),
        ]
    }

    proptest! {
        #[test]
        fn replay_matches_reference(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut ed = Editor::new("", None);
            let mut reference = Reference::default();

            for op in &ops {
                apply(&mut ed, &mut reference, op);

                prop_assert_eq!(ed.content(), reference.text.as_str());
                prop_assert_eq!(ed.caret(), reference.caret);
                // The caret must sit on a char boundary of the real string.
                prop_assert!(reference.text.is_char_boundary(ed.caret()));
            }
        }

        #[test]
        fn line_count_matches_newlines(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut ed = Editor::new("", None);
            let mut reference = Reference::default();

            for op in &ops {
                apply(&mut ed, &mut reference, op);
            }

            let newlines = reference.text.bytes().filter(|&b| b == b'\n').count();
            prop_assert_eq!(ed.line_count(), newlines + 1);
        }

        #[test]
        fn vertical_motion_keeps_caret_on_boundaries(
            ops in prop::collection::vec(op_strategy(), 0..40),
            moves in prop::collection::vec(0..4usize, 0..20),
        ) {
            let mut ed = Editor::new("", None);
            let mut reference = Reference::default();
            for op in &ops {
                apply(&mut ed, &mut reference, op);
            }

            for &mv in &moves {
                match mv {
                    0 => ed.move_up(),
                    1 => ed.move_down(),
                    2 => ed.move_home(),
                    _ => ed.move_end(),
                }
                let caret = ed.caret();
                let text = ed.content().to_owned();
                prop_assert!(caret <= text.len());
                prop_assert!(text.is_char_boundary(caret));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn save_writes_exact_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut ed = Editor::new("héllo\nworld", Some(path.clone()));
    ed.insert_text("> ");
    assert!(ed.save());
    assert!(!ed.is_modified());

    // Byte-for-byte: no trailing newline added, no translation.
    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, "> héllo\nworld".as_bytes());
}

#[test]
fn save_round_trips_through_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "one\ntwo\n").unwrap();

    let mut ed = Editor::from_file(&path).unwrap();
    assert_eq!(ed.content(), "one\ntwo\n");
    assert_eq!(ed.line_count(), 3); // trailing newline → trailing empty line
    assert!(!ed.is_modified());

    ed.insert_text("zero\n");
    assert!(ed.save());

    let reloaded = std::fs::read_to_string(&path).unwrap();
    assert_eq!(reloaded, "zero\none\ntwo\n");
}

#[test]
fn save_as_stores_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("named.txt");

    let mut ed = Editor::new("text", None);
    assert!(!ed.save()); // no path yet
    assert!(ed.save_as(path.clone()));
    assert_eq!(ed.path(), Some(path.as_path()));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "text");
}

#[test]
fn save_reports_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    // A directory is not a writable file — creation fails, save returns false.
    let mut ed = Editor::new("text", Some(dir.path().to_path_buf()));
    ed.insert_text("!");
    assert!(!ed.save());
    assert!(ed.is_modified());
}

#[test]
fn from_file_missing_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Editor::from_file(&dir.path().join("absent.txt")).is_err());
}
