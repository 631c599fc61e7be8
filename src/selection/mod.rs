//! Selection and range tracking
//!
//! Maps user interaction (click, shift-click, drag) onto a contiguous
//! line range plus the resolved set of selected line ids. The range is
//! derived, always-recomputable state over the document: it is never
//! persisted and the id set is recomputed as a pure function of
//! `(start, end, document)` whenever either changes.

use crate::models::core::{Document, LineId};

/// A contiguous line range, `start <= end`, in current document indices
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
    pub is_collapsed: bool,
}

impl SelectionRange {
    /// Caret-only range on a single line
    pub fn collapsed(index: usize) -> Self {
        Self {
            start: index,
            end: index,
            is_collapsed: true,
        }
    }

    /// Range spanning two interaction endpoints in either order
    pub fn span(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
            is_collapsed: a == b,
        }
    }
}

impl Default for SelectionRange {
    fn default() -> Self {
        Self::collapsed(0)
    }
}

/// Resolve the line ids covered by a range
///
/// Pure function of the range and the document; the tracker never
/// mutates its id set independently of this.
pub fn resolve_ids(range: SelectionRange, doc: &Document) -> Vec<LineId> {
    doc.ids_in_range(range.start, range.end)
}

/// Tracks the current selection across user interaction events
///
/// Plain click collapses to the clicked line and sets a new anchor.
/// Shift-click spans from the remembered non-shift anchor without
/// moving it. A drag anchors at mouse-down, recomputes the range as the
/// pointer enters other lines, and mouse-up finalizes and clears the
/// drag state.
#[derive(Clone, Debug)]
pub struct SelectionTracker {
    range: SelectionRange,
    anchor: Option<usize>,
    drag_origin: Option<usize>,
    selected_ids: Vec<LineId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self {
            range: SelectionRange::default(),
            anchor: None,
            drag_origin: None,
            selected_ids: Vec::new(),
        }
    }

    /// Current range
    pub fn range(&self) -> SelectionRange {
        self.range
    }

    /// Resolved ids of the currently selected lines
    pub fn selected_ids(&self) -> &[LineId] {
        &self.selected_ids
    }

    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Plain click on a line: collapse and re-anchor
    pub fn click(&mut self, index: usize, doc: &Document) {
        self.anchor = Some(index);
        self.drag_origin = None;
        self.set_range(SelectionRange::collapsed(index), doc);
    }

    /// Shift-click: span from the last non-shift anchor, keeping it
    ///
    /// Without a remembered anchor this behaves as a plain click.
    pub fn shift_click(&mut self, index: usize, doc: &Document) {
        match self.anchor {
            Some(anchor) => self.set_range(SelectionRange::span(anchor, index), doc),
            None => self.click(index, doc),
        }
    }

    /// Mouse-down starts a drag and establishes the anchor
    pub fn drag_start(&mut self, index: usize, doc: &Document) {
        self.anchor = Some(index);
        self.drag_origin = Some(index);
        self.set_range(SelectionRange::collapsed(index), doc);
    }

    /// Pointer entered another line while dragging
    pub fn drag_update(&mut self, index: usize, doc: &Document) {
        if let Some(origin) = self.drag_origin {
            self.set_range(SelectionRange::span(origin, index), doc);
        }
    }

    /// Mouse-up finalizes the range and clears the drag state
    pub fn drag_end(&mut self) {
        self.drag_origin = None;
    }

    /// Programmatic focus change: collapse onto a line, re-anchoring
    pub fn focus_line(&mut self, index: usize, doc: &Document) {
        self.click(index, doc);
    }

    /// Re-clamp and re-resolve after a document mutation
    ///
    /// Indices shift on insert/delete while ids do not; callers must
    /// invoke this whenever the document changes under a live range.
    pub fn sync(&mut self, doc: &Document) {
        let last = doc.len().saturating_sub(1);
        let start = self.range.start.min(last);
        let end = self.range.end.min(last);
        self.range = SelectionRange {
            start,
            end,
            is_collapsed: start == end,
        };
        if let Some(anchor) = self.anchor {
            self.anchor = Some(anchor.min(last));
        }
        self.selected_ids = resolve_ids(self.range, doc);
    }

    /// Reset to the default caret state (used on document load)
    pub fn reset(&mut self, doc: &Document) {
        self.anchor = None;
        self.drag_origin = None;
        self.set_range(SelectionRange::default(), doc);
    }

    fn set_range(&mut self, range: SelectionRange, doc: &Document) {
        self.range = range;
        self.selected_ids = resolve_ids(range, doc);
    }
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
