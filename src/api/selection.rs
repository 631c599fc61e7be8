//! Selection interaction API
//!
//! Forwards click, shift-click, and drag events into the selection
//! tracker and hands the resolved range (plus the derived active tool)
//! back to the host.

use wasm_bindgen::prelude::*;

use super::core::{with_session, Session};
use super::helpers::serialize;
use super::types::SelectionView;

fn selection_view(session: &Session) -> SelectionView {
    let range = session.state.selection_range();
    SelectionView {
        start: range.start,
        end: range.end,
        is_collapsed: range.is_collapsed,
        line_ids: session
            .state
            .selection
            .selected_ids()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect(),
        active_style: session.state.active_style().map(|s| s.name().to_string()),
    }
}

/// Click on a line; `shift_key` spans from the remembered anchor
#[wasm_bindgen(js_name = lineClick)]
pub fn line_click(line_index: usize, shift_key: bool) -> Result<JsValue, JsValue> {
    with_session(|session| {
        if shift_key {
            session.state.selection.shift_click(line_index, &session.state.document);
        } else {
            session.state.selection.click(line_index, &session.state.document);
        }
        serialize(&selection_view(session), "serialize selection")
    })
}

/// Mouse-down on a line starts a drag selection
#[wasm_bindgen(js_name = dragStart)]
pub fn drag_start(line_index: usize) -> Result<JsValue, JsValue> {
    with_session(|session| {
        session.state.selection.drag_start(line_index, &session.state.document);
        serialize(&selection_view(session), "serialize selection")
    })
}

/// Pointer entered a line while dragging
#[wasm_bindgen(js_name = dragOver)]
pub fn drag_over(line_index: usize) -> Result<JsValue, JsValue> {
    with_session(|session| {
        session.state.selection.drag_update(line_index, &session.state.document);
        serialize(&selection_view(session), "serialize selection")
    })
}

/// Mouse-up finalizes the drag selection
#[wasm_bindgen(js_name = dragEnd)]
pub fn drag_end() -> Result<JsValue, JsValue> {
    with_session(|session| {
        session.state.selection.drag_end();
        serialize(&selection_view(session), "serialize selection")
    })
}

/// Current selection and active tool
#[wasm_bindgen(js_name = getSelection)]
pub fn get_selection() -> Result<JsValue, JsValue> {
    with_session(|session| serialize(&selection_view(session), "serialize selection"))
}
