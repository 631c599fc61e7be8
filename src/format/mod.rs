//! Format applicator
//!
//! Bulk style application over the current selection and derivation of
//! the active toolbar tool. Style changes are pure property updates on
//! the line model; content and identity are never touched.

use std::collections::HashSet;

use crate::models::core::{Document, LineId, LineStyle};
use crate::selection::SelectionRange;

/// Reassign `style` for every line whose id is in the selection's
/// resolved id set
///
/// The id set is the single source of truth for which lines a format
/// action targets; indices are not consulted, so the operation stays
/// correct even if the range was resolved before an unrelated insert.
/// Returns the affected line indices.
pub fn apply_style(doc: &mut Document, ids: &[LineId], style: LineStyle) -> Vec<usize> {
    let changed = doc.set_style_for_ids(ids, style);
    log::debug!("applied style {} to {} lines", style.name(), changed.len());
    changed
}

/// Derive the active toolbar tool from the selection
///
/// Exactly one distinct style among the selected lines makes that style
/// the active tool; an empty or mixed selection highlights nothing.
/// Recomputed synchronously whenever the selection or document changes.
pub fn active_style(doc: &Document, range: SelectionRange) -> Option<LineStyle> {
    if doc.is_empty() {
        return None;
    }
    let end = range.end.min(doc.len() - 1);
    let start = range.start.min(end);

    let styles: HashSet<LineStyle> = doc.lines[start..=end].iter().map(|l| l.style).collect();
    if styles.len() == 1 {
        styles.into_iter().next()
    } else {
        None
    }
}
