//! Format toolbar API
//!
//! Applies a semantic style to the current selection and reports the
//! derived active tool.

use wasm_bindgen::prelude::*;

use crate::models::core::LineStyle;
use crate::wasm_log;

use super::core::with_session;
use super::helpers::serialize;
use super::types::EditResult;

/// Apply a style (by wire name) to every selected line
#[wasm_bindgen(js_name = applyStyle)]
pub fn apply_style(style_name: &str) -> Result<JsValue, JsValue> {
    let style = LineStyle::from_name(style_name)
        .ok_or_else(|| JsValue::from_str(&format!("unknown style: {}", style_name)))?;

    with_session(|session| {
        let changed = session.state.apply_style(style);
        if !changed.is_empty() {
            session.touch();
        }
        wasm_log!("applyStyle {} -> {} lines", style_name, changed.len());
        serialize(
            &EditResult {
                handled: !changed.is_empty(),
                lines: session.state.document.lines.clone(),
                caret: None,
            },
            "serialize edit result",
        )
    })
}

/// The style to highlight in the toolbar, if the selection is uniform
#[wasm_bindgen(js_name = activeStyle)]
pub fn active_style() -> Result<Option<String>, JsValue> {
    with_session(|session| Ok(session.state.active_style().map(|s| s.name().to_string())))
}
