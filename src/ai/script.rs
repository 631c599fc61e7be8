//! Assistant edit scripts
//!
//! The constrained reply shape `{explanation, edits}` and its atomic
//! application to the document. Parsing failures degrade to a plain
//! message; a script that fails validation leaves the document
//! untouched, never partially edited.

use serde::Deserialize;

use crate::edit::IdGenerator;
use crate::models::core::{Document, Line, LineStyle};

use super::{AssistantError, COULD_NOT_PROCESS};

/// A structured edit reply from the generator
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditScript {
    /// Human-readable summary of what the edits do
    pub explanation: String,

    /// The edits, applied in order
    pub edits: Vec<ScriptEdit>,
}

/// One edit instruction
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEdit {
    /// Replace the text and style of an existing line, keeping its id
    #[serde(rename_all = "camelCase")]
    Replace {
        line_id: String,
        new_text: String,
        style: LineStyle,
    },

    /// Insert a new line after an anchor (or append when absent)
    #[serde(rename_all = "camelCase")]
    Add {
        new_text: String,
        style: LineStyle,
        #[serde(default)]
        insert_after: Option<String>,
    },
}

/// How a raw generator reply was interpreted
#[derive(Clone, Debug, PartialEq)]
pub enum AssistantReply {
    /// A well-formed edit script
    Edits(EditScript),

    /// Plain prose: either a free-text answer, or the degraded form of
    /// a malformed structured reply
    Message(String),
}

/// Interpret a raw generator reply
///
/// A reply that parses as an edit script is returned as such. JSON that
/// is not a valid script degrades to its `explanation` field when one
/// can be salvaged, otherwise to a generic failure message. Anything
/// that is not JSON is a free-text answer.
pub fn parse_reply(raw: &str) -> AssistantReply {
    match serde_json::from_str::<EditScript>(raw) {
        Ok(script) => AssistantReply::Edits(script),
        Err(_) => {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) {
                let salvaged = value
                    .get("explanation")
                    .and_then(|e| e.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| COULD_NOT_PROCESS.to_string());
                log::warn!("assistant reply was JSON but not a valid edit script");
                return AssistantReply::Message(salvaged);
            }
            AssistantReply::Message(raw.to_string())
        }
    }
}

/// Apply an edit script to the document atomically
///
/// Every edit is validated and applied against a working copy; only a
/// fully successful script is swapped in, together with the ids it
/// consumed. Returns the ids of changed and inserted lines.
pub fn apply_edit_script(
    doc: &mut Document,
    ids: &mut IdGenerator,
    script: &EditScript,
) -> Result<Vec<String>, AssistantError> {
    let mut work = doc.clone();
    let mut gen = ids.clone();
    let mut touched = Vec::with_capacity(script.edits.len());

    for edit in &script.edits {
        match edit {
            ScriptEdit::Replace { line_id, new_text, style } => {
                let index = work
                    .index_of(&line_id.as_str().into())
                    .ok_or_else(|| AssistantError::UnknownLine(line_id.clone()))?;
                let line = &mut work.lines[index];
                line.set_text(new_text);
                line.style = *style;
                touched.push(line_id.clone());
            }
            ScriptEdit::Add { new_text, style, insert_after } => {
                let index = match insert_after {
                    Some(anchor) => {
                        work.index_of(&anchor.as_str().into())
                            .ok_or_else(|| AssistantError::UnknownLine(anchor.clone()))?
                            + 1
                    }
                    None => work.len(),
                };
                let line = Line::new(gen.next_id(), new_text.clone(), *style);
                touched.push(line.id.as_str().to_string());
                work.insert_line(index, line);
            }
        }
    }

    debug_assert!(work.validate().is_ok(), "edit script broke document invariants");
    log::info!("applied assistant edit script: {} edits", script.edits.len());
    *doc = work;
    *ids = gen;
    Ok(touched)
}
