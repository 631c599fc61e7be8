//! Character-offset helpers
//!
//! Caret offsets arrive from the host as character positions; string
//! mutation needs byte indices. These helpers do the clamped mapping.

/// Map a character offset to a byte index, clamping to the text end
pub fn char_to_byte_index(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
