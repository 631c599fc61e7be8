//! Shared types for the WASM API
//!
//! Result shapes crossing the JS boundary. The host re-renders from
//! the full line list; caret and selection payloads tell it where to
//! put focus afterwards.

use serde::{Deserialize, Serialize};

use crate::models::core::Line;
use crate::store::ProjectData;

/// Caret position crossing the boundary
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct CaretInfo {
    pub line: usize,
    pub offset: usize,
}

impl From<crate::edit::Caret> for CaretInfo {
    fn from(caret: crate::edit::Caret) -> Self {
        Self {
            line: caret.line,
            offset: caret.offset,
        }
    }
}

/// Result of an edit operation
///
/// `handled` tells the host whether to suppress its default keystroke
/// behavior; when false the document was left untouched.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EditResult {
    pub handled: bool,
    pub lines: Vec<Line>,
    pub caret: Option<CaretInfo>,
}

/// Current selection, resolved for the host
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SelectionView {
    pub start: usize,
    pub end: usize,
    pub is_collapsed: bool,
    pub line_ids: Vec<String>,
    pub active_style: Option<String>,
}

/// A due persistence write for the host to issue
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SaveRequest {
    pub project_id: Option<String>,
    pub data: ProjectData,
}

/// A generation request for the host to forward to the text service
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PromptRequest {
    pub prompt: String,

    /// Document epoch the prompt was built against; echoed back with
    /// the reply so stale results can be discarded
    pub epoch: u32,
}

/// How an assistant reply was handled
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AssistantOutcome {
    /// "edits", "message", or "discarded"
    pub status: String,

    /// Text to show in the conversation panel
    pub message: String,

    /// Full line list after any applied edits
    pub lines: Vec<Line>,
}
