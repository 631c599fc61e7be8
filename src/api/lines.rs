//! Line editing operations
//!
//! Split (Enter), the Backspace boundary resolution, and in-line text
//! replacement. Every mutation notes itself with the autosave debounce
//! and returns the full line list plus the caret for the host to apply.

use wasm_bindgen::prelude::*;

use crate::edit::BackspaceOutcome;
use crate::wasm_log;

use super::core::with_session;
use super::helpers::{serialize, to_js_err};
use super::types::{CaretInfo, EditResult};

/// Split the line at `line_index` at character `offset` (Enter key)
///
/// The left half keeps its id and style; the new line inherits the
/// style and takes focus at offset 0.
#[wasm_bindgen(js_name = splitLine)]
pub fn split_line(line_index: usize, offset: usize) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let caret = session
            .state
            .split_at(line_index, offset)
            .map_err(to_js_err)?;
        session.touch();
        wasm_log!("splitLine {} @ {}", line_index, offset);
        serialize(
            &EditResult {
                handled: true,
                lines: session.state.document.lines.clone(),
                caret: Some(CaretInfo::from(caret)),
            },
            "serialize edit result",
        )
    })
}

/// Resolve a Backspace keystroke at `line_index` / `offset`
///
/// `handled: false` means the boundary conditions were not met and the
/// host should let its default deletion run. At the first line the
/// keystroke is swallowed without any change.
#[wasm_bindgen(js_name = backspaceAtBoundary)]
pub fn backspace_at_boundary(
    line_index: usize,
    offset: usize,
    has_selection: bool,
) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let outcome = session
            .state
            .backspace_at(line_index, offset, has_selection)
            .map_err(to_js_err)?;

        let (handled, caret) = match outcome {
            BackspaceOutcome::Merged(caret) => {
                session.touch();
                (true, Some(CaretInfo::from(caret)))
            }
            BackspaceOutcome::Ignored => (true, None),
            BackspaceOutcome::PassThrough => (false, None),
        };
        serialize(
            &EditResult {
                handled,
                lines: session.state.document.lines.clone(),
                caret,
            },
            "serialize edit result",
        )
    })
}

/// Replace the text of one line (typing within the line)
#[wasm_bindgen(js_name = setLineText)]
pub fn set_line_text(line_index: usize, text: &str) -> Result<(), JsValue> {
    with_session(|session| {
        session
            .state
            .replace_line_text(line_index, text)
            .map_err(to_js_err)?;
        session.touch();
        Ok(())
    })
}
