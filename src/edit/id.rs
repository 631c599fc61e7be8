//! Line id generation
//!
//! Ids are monotonically generated from a counter owned by the editor
//! state and threaded through creation calls. On session load the
//! counter is seeded past the highest numeric suffix present in the
//! loaded document, so ids can never collide even after external edits
//! left a sparse sequence.

use crate::models::core::{Line, LineId};

/// Monotonic id source for newly created lines
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Generator for a brand-new document
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Generator seeded from an existing line set
    ///
    /// The counter starts one past the maximum numeric suffix found in
    /// any id, treating suffix-less ids as zero.
    pub fn seeded_from(lines: &[Line]) -> Self {
        let max = lines
            .iter()
            .filter_map(|line| line.id.numeric_suffix())
            .max()
            .unwrap_or(0);
        Self { next: max + 1 }
    }

    /// Produce the next id, advancing the counter
    pub fn next_id(&mut self) -> LineId {
        let id = LineId::from_counter(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
