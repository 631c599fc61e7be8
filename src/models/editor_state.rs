//! Editor state management
//!
//! The complete state of an editing session: the document, the id
//! generator that owns line identity, the selection tracker, and the
//! caret focus. This is the WASM-owned source of truth; all document
//! mutation funnels through the entry points here so id uniqueness and
//! style validity stay centrally enforced.
//!
//! The selection is derived state and is deliberately not serialized
//! anywhere; it is reset atomically whenever a document is loaded.

use crate::edit::{self, BackspaceOutcome, Caret, EditError, IdGenerator};
use crate::format;
use crate::models::core::{Document, LineId, LineStyle, StructureError};
use crate::selection::{SelectionRange, SelectionTracker};

/// Complete editing-session state
#[derive(Debug)]
pub struct EditorState {
    /// The document being edited
    pub document: Document,

    /// Line id source, seeded from the document on every load
    pub ids: IdGenerator,

    /// Current selection over the document
    pub selection: SelectionTracker,

    /// Focused caret, when a line has focus
    pub focus: Option<Caret>,

    /// Bumped on every document replacement; used to discard results
    /// from collaborators that were working against an abandoned
    /// document
    pub epoch: u64,
}

impl EditorState {
    /// Create a session around a document
    pub fn new(document: Document) -> Self {
        let ids = IdGenerator::seeded_from(&document.lines);
        let mut selection = SelectionTracker::new();
        selection.reset(&document);
        Self {
            document,
            ids,
            selection,
            focus: None,
            epoch: 0,
        }
    }

    /// Replace the document wholesale, resetting all derived state
    ///
    /// One atomic transition: the document, id generator, selection,
    /// and focus all flip together, and the epoch advances so stale
    /// collaborator results can be recognized and discarded.
    pub fn load(&mut self, document: Document) {
        self.ids = IdGenerator::seeded_from(&document.lines);
        self.document = document;
        self.selection.reset(&self.document);
        self.focus = None;
        self.epoch += 1;
        log::info!(
            "loaded document \"{}\" ({} lines), epoch {}",
            self.document.name,
            self.document.len(),
            self.epoch
        );
    }

    /// Split the focused line at the caret (Enter)
    pub fn split_at(&mut self, line: usize, offset: usize) -> Result<Caret, EditError> {
        let caret = edit::split_line(&mut self.document, &mut self.ids, line, offset)?;
        self.focus = Some(caret);
        self.selection.focus_line(caret.line, &self.document);
        Ok(caret)
    }

    /// Resolve Backspace at a line boundary
    pub fn backspace_at(
        &mut self,
        line: usize,
        offset: usize,
        has_selection: bool,
    ) -> Result<BackspaceOutcome, EditError> {
        let outcome = edit::backspace(&mut self.document, line, offset, has_selection)?;
        if let BackspaceOutcome::Merged(caret) = outcome {
            self.focus = Some(caret);
            self.selection.focus_line(caret.line, &self.document);
        }
        Ok(outcome)
    }

    /// Replace the text of one line (typing within a line)
    pub fn replace_line_text(&mut self, line: usize, text: &str) -> Result<(), StructureError> {
        self.document.replace_text(line, text)?;
        self.selection.sync(&self.document);
        Ok(())
    }

    /// Apply a style to the current selection's resolved id set
    pub fn apply_style(&mut self, style: LineStyle) -> Vec<usize> {
        let ids: Vec<LineId> = self.selection.selected_ids().to_vec();
        let changed = format::apply_style(&mut self.document, &ids, style);
        self.selection.sync(&self.document);
        changed
    }

    /// Derive the active toolbar tool from the current selection
    pub fn active_style(&self) -> Option<LineStyle> {
        format::active_style(&self.document, self.selection.range())
    }

    /// Current selection range
    pub fn selection_range(&self) -> SelectionRange {
        self.selection.range()
    }
}
