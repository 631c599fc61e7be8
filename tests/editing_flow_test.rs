// End-to-end editing flows through the editor state entry points

use screenplay_wasm::edit::{BackspaceOutcome, Caret};
use screenplay_wasm::models::{Document, EditorState, LineStyle};
use screenplay_wasm::selection::SelectionRange;

#[test]
fn test_typing_session_keeps_ids_unique() {
    let mut state = EditorState::new(Document::default());

    // A burst of structural edits: split lines apart, type, merge back
    state.split_at(1, 4).unwrap();
    state.split_at(2, 0).unwrap();
    state.replace_line_text(3, "rewritten").unwrap();
    state.backspace_at(3, 0, false).unwrap();
    state.split_at(0, 8).unwrap();

    assert!(state.document.validate().is_ok());
}

#[test]
fn test_split_merge_inverse_through_session() {
    let mut state = EditorState::new(Document::default());
    let original = state.document.lines[2].clone();

    let caret = state.split_at(2, 5).unwrap();
    assert_eq!(caret, Caret::new(3, 0));

    let outcome = state.backspace_at(3, 0, false).unwrap();
    assert_eq!(outcome, BackspaceOutcome::Merged(Caret::new(2, 5)));

    assert_eq!(state.document.lines[2].text, original.text);
    assert_eq!(state.document.lines[2].id, original.id);
    assert_eq!(state.document.len(), 8);
}

#[test]
fn test_merge_at_top_is_silent_noop() {
    let mut state = EditorState::new(Document::default());
    let before = state.document.clone();

    let outcome = state.backspace_at(0, 0, false).unwrap();

    assert_eq!(outcome, BackspaceOutcome::Ignored);
    assert_eq!(state.document, before);
}

#[test]
fn test_selection_then_format_flow() {
    let mut state = EditorState::new(Document::default());

    // Shift-click selection over the dialogue block
    state.selection.click(5, &state.document);
    state.selection.shift_click(7, &state.document);
    assert_eq!(state.active_style(), None);

    let changed = state.apply_style(LineStyle::Dialogue);
    assert_eq!(changed, vec![5, 6, 7]);
    assert_eq!(state.active_style(), Some(LineStyle::Dialogue));

    // Style application touched neither ids nor text
    assert_eq!(state.document.lines[5].text, "JOHN");
    assert_eq!(state.document.lines[5].id.as_str(), "l6");
}

#[test]
fn test_drag_selection_format_survives_split_above() {
    let mut state = EditorState::new(Document::default());

    state.selection.drag_start(6, &state.document);
    state.selection.drag_update(7, &state.document);
    state.selection.drag_end();
    let ids = state.selection.selected_ids().to_vec();

    // Splitting an earlier line shifts indices 6 and 7 down by one
    state.split_at(0, 4).unwrap();

    // The captured id set still addresses the same lines
    let mut doc = state.document.clone();
    let changed = screenplay_wasm::format::apply_style(&mut doc, &ids, LineStyle::General);
    assert_eq!(changed, vec![7, 8]);
}

#[test]
fn test_split_inherits_style_for_continued_dialogue() {
    let mut state = EditorState::new(Document::default());

    let caret = state.split_at(7, 4).unwrap();

    assert_eq!(state.document.lines[7].style, LineStyle::Dialogue);
    assert_eq!(state.document.lines[caret.line].style, LineStyle::Dialogue);
    assert_eq!(state.document.lines[7].text, "I'm ");
    assert_eq!(state.document.lines[8].text, "late again.");
}

#[test]
fn test_selection_collapses_to_caret_after_structural_edit() {
    let mut state = EditorState::new(Document::default());
    state.selection.click(3, &state.document);
    state.selection.shift_click(6, &state.document);

    state.split_at(4, 0).unwrap();

    assert_eq!(state.selection_range(), SelectionRange::collapsed(5));
}

#[test]
fn test_load_replaces_everything_at_once() {
    let mut state = EditorState::new(Document::default());
    state.selection.click(7, &state.document);
    state.split_at(7, 2).unwrap();
    let epoch_before = state.epoch;

    state.load(Document::seed("Second Draft"));

    assert_eq!(state.document.name, "Second Draft");
    assert_eq!(state.document.len(), 8);
    assert_eq!(state.selection_range(), SelectionRange::collapsed(0));
    assert_eq!(state.focus, None);
    assert_eq!(state.epoch, epoch_before + 1);
}
