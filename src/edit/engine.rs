//! Editing engine: cursor-aware split and merge
//!
//! The two structural mutations of the line model. Split (Enter) breaks
//! a line at the caret into two lines; merge (Backspace at a line
//! boundary) folds a line into its predecessor. Both preserve line
//! identity for every unaffected line and report where the caret lands.

use thiserror::Error;

use crate::models::core::{Document, Line};
use crate::utils::text::char_to_byte_index;

use super::id::IdGenerator;

/// A caret position: line index plus character offset within the line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caret {
    pub line: usize,
    pub offset: usize,
}

impl Caret {
    pub fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

/// What a Backspace keystroke at a line boundary resolved to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackspaceOutcome {
    /// The line was merged into its predecessor; caret at the junction
    Merged(Caret),

    /// Boundary conditions not met; the host applies its default
    /// single-character or selection deletion
    PassThrough,

    /// Backspace at the very first line boundary; silently ignored
    Ignored,
}

/// Editing engine errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EditError {
    /// The focused line index does not address a line
    #[error("line index {index} out of bounds (len {len})")]
    LineOutOfBounds { index: usize, len: usize },
}

/// Split the line at `index` at character offset `offset`
///
/// The left half keeps the original line's id and style; the right half
/// becomes a brand-new line inserted at `index + 1`, inheriting the
/// style. The offset is clamped to the text length, so the split always
/// succeeds: offset 0 leaves the original line empty, offset == len
/// produces an empty new line. The document moves in a single
/// transition and the returned caret sits at the start of the new line.
pub fn split_line(
    doc: &mut Document,
    ids: &mut IdGenerator,
    index: usize,
    offset: usize,
) -> Result<Caret, EditError> {
    let len = doc.len();
    let line = doc
        .lines
        .get_mut(index)
        .ok_or(EditError::LineOutOfBounds { index, len })?;

    let at = char_to_byte_index(&line.text, offset);
    let rest = line.text.split_off(at);
    let style = line.style;

    let new_line = Line::new(ids.next_id(), rest, style);
    doc.insert_line(index + 1, new_line);

    log::debug!("split line {} at offset {}", index, offset);
    Ok(Caret::new(index + 1, 0))
}

/// Resolve a Backspace keystroke on the line at `index`
///
/// Merge fires only when there is no active text selection AND the
/// caret sits at offset 0 or the line is empty AND the line is not the
/// first. The predecessor absorbs the text by concatenation and keeps
/// its own id and style; the removed line's id and style are discarded.
/// The caret lands at the predecessor's pre-merge length, exactly at
/// the junction point.
pub fn backspace(
    doc: &mut Document,
    index: usize,
    offset: usize,
    has_selection: bool,
) -> Result<BackspaceOutcome, EditError> {
    let len = doc.len();
    let line = doc
        .lines
        .get(index)
        .ok_or(EditError::LineOutOfBounds { index, len })?;

    if has_selection {
        return Ok(BackspaceOutcome::PassThrough);
    }
    if offset != 0 && !line.text.is_empty() {
        return Ok(BackspaceOutcome::PassThrough);
    }
    if index == 0 {
        return Ok(BackspaceOutcome::Ignored);
    }

    let removed = doc.remove_line(index);
    let prev = &mut doc.lines[index - 1];
    let junction = prev.char_count();
    prev.text.push_str(&removed.text);

    log::debug!("merged line {} into {}", index, index - 1);
    Ok(BackspaceOutcome::Merged(Caret::new(index - 1, junction)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::core::{Document, LineStyle};

    fn doc() -> Document {
        Document::default()
    }

    #[test]
    fn test_split_keeps_left_id_and_inherits_style() {
        let mut doc = doc();
        let mut ids = IdGenerator::seeded_from(&doc.lines);
        let original_id = doc.lines[1].id.clone();

        // "EXT. CITY STREET - DAY" split after "EXT."
        let caret = split_line(&mut doc, &mut ids, 1, 4).unwrap();

        assert_eq!(caret, Caret::new(2, 0));
        assert_eq!(doc.lines[1].id, original_id);
        assert_eq!(doc.lines[1].text, "EXT.");
        assert_eq!(doc.lines[2].text, " CITY STREET - DAY");
        assert_eq!(doc.lines[2].style, LineStyle::Location);
        assert_eq!(doc.lines[2].id.as_str(), "l9");
        assert_eq!(doc.len(), 9);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_split_at_zero_and_at_end() {
        let mut doc = doc();
        let mut ids = IdGenerator::seeded_from(&doc.lines);

        split_line(&mut doc, &mut ids, 0, 0).unwrap();
        assert_eq!(doc.lines[0].text, "");
        assert_eq!(doc.lines[1].text, "FADE IN:");

        let end = doc.lines[1].char_count();
        split_line(&mut doc, &mut ids, 1, end).unwrap();
        assert_eq!(doc.lines[1].text, "FADE IN:");
        assert_eq!(doc.lines[2].text, "");
    }

    #[test]
    fn test_split_clamps_excessive_offset() {
        let mut doc = doc();
        let mut ids = IdGenerator::seeded_from(&doc.lines);

        split_line(&mut doc, &mut ids, 0, 9999).unwrap();
        assert_eq!(doc.lines[0].text, "FADE IN:");
        assert_eq!(doc.lines[1].text, "");
    }

    #[test]
    fn test_split_out_of_bounds_errors() {
        let mut doc = doc();
        let mut ids = IdGenerator::seeded_from(&doc.lines);
        assert_eq!(
            split_line(&mut doc, &mut ids, 42, 0),
            Err(EditError::LineOutOfBounds { index: 42, len: 8 })
        );
    }

    #[test]
    fn test_merge_places_caret_at_junction() {
        let mut doc = doc();
        let prev_len = doc.lines[6].char_count();
        let prev_id = doc.lines[6].id.clone();

        let outcome = backspace(&mut doc, 7, 0, false).unwrap();

        assert_eq!(outcome, BackspaceOutcome::Merged(Caret::new(6, prev_len)));
        assert_eq!(doc.lines[6].text, "(muttering)I'm late again.");
        assert_eq!(doc.lines[6].id, prev_id);
        assert_eq!(doc.lines[6].style, LineStyle::Parenthetical);
        assert_eq!(doc.len(), 7);
    }

    #[test]
    fn test_merge_fires_for_empty_line_regardless_of_offset() {
        let mut doc = doc();
        doc.lines[3].text.clear();

        let outcome = backspace(&mut doc, 3, 5, false).unwrap();
        assert!(matches!(outcome, BackspaceOutcome::Merged(_)));
    }

    #[test]
    fn test_backspace_mid_line_passes_through() {
        let mut doc = doc();
        let before = doc.clone();

        let outcome = backspace(&mut doc, 2, 4, false).unwrap();
        assert_eq!(outcome, BackspaceOutcome::PassThrough);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_backspace_with_selection_passes_through() {
        let mut doc = doc();
        let before = doc.clone();

        // Even at offset 0, an active selection defers to default deletion
        let outcome = backspace(&mut doc, 2, 0, true).unwrap();
        assert_eq!(outcome, BackspaceOutcome::PassThrough);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_merge_at_first_line_is_noop() {
        let mut doc = doc();
        let before = doc.clone();

        let outcome = backspace(&mut doc, 0, 0, false).unwrap();
        assert_eq!(outcome, BackspaceOutcome::Ignored);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_split_then_merge_is_inverse() {
        let mut doc = doc();
        let mut ids = IdGenerator::seeded_from(&doc.lines);
        let original = doc.lines[4].clone();

        for offset in 0..=original.char_count() {
            let caret = split_line(&mut doc, &mut ids, 4, offset).unwrap();
            let outcome = backspace(&mut doc, caret.line, 0, false).unwrap();

            assert_eq!(outcome, BackspaceOutcome::Merged(Caret::new(4, offset)));
            assert_eq!(doc.lines[4].text, original.text);
            assert_eq!(doc.lines[4].id, original.id);
            assert_eq!(doc.lines[4].style, original.style);
            assert_eq!(doc.len(), 8);
        }
    }

    #[test]
    fn test_ids_stay_unique_across_many_splits() {
        let mut doc = doc();
        let mut ids = IdGenerator::seeded_from(&doc.lines);

        for _ in 0..20 {
            split_line(&mut doc, &mut ids, 0, 1).unwrap();
        }
        assert!(doc.validate().is_ok());
        assert_eq!(doc.len(), 28);
    }

    #[test]
    fn test_split_handles_multibyte_text() {
        let mut doc = doc();
        let mut ids = IdGenerator::seeded_from(&doc.lines);
        doc.lines[0].set_text("caf\u{e9} noir");

        let caret = split_line(&mut doc, &mut ids, 0, 4).unwrap();
        assert_eq!(doc.lines[0].text, "caf\u{e9}");
        assert_eq!(doc.lines[1].text, " noir");
        assert_eq!(caret, Caret::new(1, 0));
    }
}
