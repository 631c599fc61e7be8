//! Core data structures for the screenplay editor
//!
//! This module defines the fundamental line-based architecture for
//! representing a screenplay: an ordered sequence of typed text lines
//! with stable identities.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub use super::elements::{LineLayout, LineStyle, ALL_STYLES};

/// Stable line identity, assigned at creation and never reused
///
/// Ids are short strings with a numeric suffix (`l1`, `l2`, ...). The
/// suffix feeds the id generator seeding so a loaded document with a
/// sparse or externally modified id sequence can never collide with
/// freshly generated ids.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct LineId(pub String);

impl LineId {
    /// Build an id from the generator counter value
    pub fn from_counter(n: u64) -> Self {
        LineId(format!("l{}", n))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the trailing numeric suffix, if any
    ///
    /// `"l42"` yields `Some(42)`; ids without trailing digits yield `None`.
    pub fn numeric_suffix(&self) -> Option<u64> {
        let digits_start = self
            .0
            .rfind(|c: char| !c.is_ascii_digit())
            .map(|i| i + 1)
            .unwrap_or(0);
        let digits = &self.0[digits_start..];
        if digits.is_empty() {
            None
        } else {
            digits.parse().ok()
        }
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineId {
    fn from(s: &str) -> Self {
        LineId(s.to_string())
    }
}

/// The atomic unit of the document: one typed text line
///
/// Serializes to the persisted wire shape `{id, text, style}` and must
/// round-trip byte-for-byte through the project store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Line {
    /// Stable unique identifier
    pub id: LineId,

    /// Plain text content; newlines are stripped on input
    pub text: String,

    /// Semantic role determining presentation
    pub style: LineStyle,
}

impl Line {
    /// Create a new line, sanitizing the text
    pub fn new(id: LineId, text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            id,
            text: sanitize_text(&text.into()),
            style,
        }
    }

    /// Replace the text content, stripping any embedded newlines
    pub fn set_text(&mut self, text: &str) {
        self.text = sanitize_text(text);
    }

    /// Character count of the text (not byte length)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Strip newline characters from user or collaborator input
///
/// Lines carry no embedded structure; carriage returns and line feeds
/// are removed rather than rejected.
pub fn sanitize_text(text: &str) -> String {
    if text.contains(['\n', '\r']) {
        text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
    } else {
        text.to_string()
    }
}

/// Ordered sequence of lines in screenplay reading order
///
/// Invariants: line ids are pairwise unique at all times, and the
/// sequence is never empty during active editing. All mutation goes
/// through the editing engine or format applicator entry points so
/// these invariants stay centrally enforced.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Document {
    /// Project display name
    pub name: String,

    /// The screenplay body
    pub lines: Vec<Line>,
}

impl Document {
    /// Create a document with a name and an initial line set
    pub fn new(name: impl Into<String>, lines: Vec<Line>) -> Self {
        let doc = Self {
            name: name.into(),
            lines,
        };
        debug_assert!(doc.validate().is_ok(), "document invariant violated");
        doc
    }

    /// The default seed document for a new project
    pub fn seed(name: impl Into<String>) -> Self {
        Self::new(
            name,
            vec![
                Line::new("l1".into(), "FADE IN:", LineStyle::Action),
                Line::new("l2".into(), "EXT. CITY STREET - DAY", LineStyle::Location),
                Line::new("l3".into(), "A bustling urban landscape...", LineStyle::Action),
                Line::new("l4".into(), "JOHN (30s) walks with purpose.", LineStyle::Action),
                Line::new("l5".into(), "He checks his watch.", LineStyle::Action),
                Line::new("l6".into(), "JOHN", LineStyle::Character),
                Line::new("l7".into(), "(muttering)", LineStyle::Parenthetical),
                Line::new("l8".into(), "I'm late again.", LineStyle::Dialogue),
            ],
        )
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines
    ///
    /// Only transiently true while loading; an active editing session
    /// always holds at least one line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by index
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Find the index of a line by id
    pub fn index_of(&self, id: &LineId) -> Option<usize> {
        self.lines.iter().position(|line| &line.id == id)
    }

    /// Insert a line at an index, preserving all other line ids
    pub fn insert_line(&mut self, index: usize, line: Line) {
        debug_assert!(
            self.index_of(&line.id).is_none(),
            "duplicate line id: {}",
            line.id
        );
        debug_assert!(index <= self.lines.len(), "insert index out of bounds");
        self.lines.insert(index, line);
    }

    /// Remove and return the line at an index
    pub fn remove_line(&mut self, index: usize) -> Line {
        debug_assert!(index < self.lines.len(), "remove index out of bounds");
        self.lines.remove(index)
    }

    /// Replace the text of the line at an index
    pub fn replace_text(&mut self, index: usize, text: &str) -> Result<(), StructureError> {
        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(StructureError::IndexOutOfBounds { index, len })?;
        line.set_text(text);
        Ok(())
    }

    /// Reassign the style of every line whose id is in the given set
    ///
    /// Never touches `id` or `text`. Returns the indices of affected
    /// lines for dirty-region rendering.
    pub fn set_style_for_ids(&mut self, ids: &[LineId], style: LineStyle) -> Vec<usize> {
        let wanted: HashSet<&LineId> = ids.iter().collect();
        let mut changed = Vec::new();
        for (index, line) in self.lines.iter_mut().enumerate() {
            if wanted.contains(&line.id) {
                line.style = style;
                changed.push(index);
            }
        }
        changed
    }

    /// Resolve the ids of a contiguous index range, clamped to bounds
    pub fn ids_in_range(&self, start: usize, end: usize) -> Vec<LineId> {
        if self.lines.is_empty() || start > end {
            return Vec::new();
        }
        let end = end.min(self.lines.len() - 1);
        self.lines[start.min(end)..=end]
            .iter()
            .map(|line| line.id.clone())
            .collect()
    }

    /// Validate document structure invariants
    ///
    /// Duplicate ids are programming errors; this check backs the
    /// debug assertions in the mutation paths and the test suite.
    pub fn validate(&self) -> Result<(), StructureError> {
        if self.lines.is_empty() {
            return Err(StructureError::EmptyDocument);
        }
        let mut seen = HashSet::with_capacity(self.lines.len());
        for line in &self.lines {
            if !seen.insert(&line.id) {
                return Err(StructureError::DuplicateId(line.id.as_str().to_string()));
            }
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::seed("Untitled Project")
    }
}

/// Errors for malformed document structure
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StructureError {
    /// Two lines share an id
    #[error("duplicate line id: {0}")]
    DuplicateId(String),

    /// The line sequence is empty
    #[error("document has no lines")]
    EmptyDocument,

    /// An index does not address a line
    #[error("line index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Deserialize a persisted document, falling back to the seed document
///
/// Malformed persisted data (missing `lines`, unknown `style`, empty
/// line list) substitutes a safe default rather than failing the
/// session.
pub fn document_from_json(json: &str) -> Document {
    match serde_json::from_str::<Document>(json) {
        Ok(doc) if !doc.is_empty() && doc.validate().is_ok() => doc,
        Ok(_) => {
            log::warn!("persisted document failed validation, substituting seed document");
            Document::default()
        }
        Err(e) => {
            log::warn!("persisted document unreadable ({}), substituting seed document", e);
            Document::default()
        }
    }
}
