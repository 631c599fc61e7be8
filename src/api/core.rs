//! Session lifecycle and persistence API
//!
//! Owns the WASM-side session singleton (canonical source of truth for
//! the document and all derived state) and the document-level
//! operations: project creation, loading, renaming, and the debounced
//! autosave handshake with the host.

use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::ai::script::{apply_edit_script, parse_reply, AssistantReply};
use crate::ai::COULD_NOT_PROCESS;
use crate::models::core::{document_from_json, Document};
use crate::models::editor_state::EditorState;
use crate::models::messages::{ConversationMessage, MessageRole};
use crate::store::{AutosaveScheduler, ProjectData};
use crate::table_read::Sequencer;
use crate::{wasm_info, wasm_warn};

use super::helpers::serialize;
use super::types::{AssistantOutcome, SaveRequest};

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<Option<Session>> = Mutex::new(None);
}

/// Everything the WASM side owns for one editing session
pub struct Session {
    pub state: EditorState,
    pub project_id: Option<String>,
    pub autosave: AutosaveScheduler,
    pub sequencer: Sequencer,
    pub conversation: Vec<ConversationMessage>,
    next_message_id: u64,
}

impl Session {
    fn new() -> Self {
        Self {
            state: EditorState::new(Document::default()),
            project_id: None,
            autosave: AutosaveScheduler::default(),
            sequencer: Sequencer::new(),
            conversation: Vec::new(),
            next_message_id: 1,
        }
    }

    /// Record a document mutation for the autosave debounce
    pub fn touch(&mut self) {
        self.autosave.note_change(now_ms());
    }

    /// Append a conversation message, assigning the next id
    pub fn push_message(&mut self, content: &str, role: MessageRole) {
        let id = format!("m{}", self.next_message_id);
        self.next_message_id += 1;
        self.conversation
            .push(ConversationMessage::new(id, content, role));
    }

    /// Replace the conversation (after loading from the store)
    pub fn set_conversation(&mut self, messages: Vec<ConversationMessage>) {
        let max = messages
            .iter()
            .filter_map(|m| {
                let digits_start = m
                    .id
                    .rfind(|c: char| !c.is_ascii_digit())
                    .map(|i| i + 1)
                    .unwrap_or(0);
                m.id[digits_start..].parse::<u64>().ok()
            })
            .max()
            .unwrap_or(0);
        self.next_message_id = max + 1;
        self.conversation = messages;
    }

    /// Interpret an assistant reply against the current document
    ///
    /// Stale replies (epoch mismatch) are discarded outright; structured
    /// edits apply atomically or degrade to a user-visible message.
    pub fn accept_reply(&mut self, epoch: u64, raw: &str) -> AssistantOutcome {
        if epoch != self.state.epoch {
            wasm_warn!("discarding assistant reply for stale epoch {}", epoch);
            return AssistantOutcome {
                status: "discarded".to_string(),
                message: String::new(),
                lines: self.state.document.lines.clone(),
            };
        }

        let (status, message) = match parse_reply(raw) {
            AssistantReply::Edits(script) => {
                match apply_edit_script(&mut self.state.document, &mut self.state.ids, &script) {
                    Ok(touched) => {
                        self.state.selection.sync(&self.state.document);
                        self.touch();
                        wasm_info!("assistant edited {} lines", touched.len());
                        ("edits", script.explanation)
                    }
                    Err(e) => {
                        wasm_warn!("assistant edit script rejected: {}", e);
                        ("message", COULD_NOT_PROCESS.to_string())
                    }
                }
            }
            AssistantReply::Message(text) => ("message", text),
        };

        self.push_message(&message, MessageRole::Assistant);
        AssistantOutcome {
            status: status.to_string(),
            message,
            lines: self.state.document.lines.clone(),
        }
    }
}

/// Run a closure against the session, creating it on first use
pub(crate) fn with_session<T>(
    f: impl FnOnce(&mut Session) -> Result<T, JsValue>,
) -> Result<T, JsValue> {
    let mut guard = SESSION
        .lock()
        .map_err(|_| JsValue::from_str("session lock poisoned"))?;
    let session = guard.get_or_insert_with(Session::new);
    f(session)
}

/// Current wall-clock milliseconds from the host
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Start a fresh project with the seed document
#[wasm_bindgen(js_name = newProject)]
pub fn new_project(name: &str) -> Result<JsValue, JsValue> {
    with_session(|session| {
        super::table_read::halt_playback(session);
        session.state.load(Document::seed(name));
        session.project_id = None;
        session.autosave.reset();
        session.conversation.clear();
        wasm_info!("new project \"{}\"", name);
        serialize(&session.state.document, "serialize document")
    })
}

/// Load a persisted project, replacing the session document
///
/// `document_json` is the stored `{name, lines}` payload; malformed
/// data substitutes the seed document rather than failing the session.
#[wasm_bindgen(js_name = loadProject)]
pub fn load_project(project_id: &str, document_json: &str) -> Result<JsValue, JsValue> {
    with_session(|session| {
        super::table_read::halt_playback(session);
        session.state.load(document_from_json(document_json));
        session.project_id = Some(project_id.to_string());
        session.autosave.reset();
        session.conversation.clear();
        serialize(&session.state.document, "serialize document")
    })
}

/// Current document as `{name, lines}`
#[wasm_bindgen(js_name = getDocument)]
pub fn get_document() -> Result<JsValue, JsValue> {
    with_session(|session| serialize(&session.state.document, "serialize document"))
}

/// Rename the project
#[wasm_bindgen(js_name = setProjectName)]
pub fn set_project_name(name: &str) -> Result<(), JsValue> {
    with_session(|session| {
        session.state.document.name = name.to_string();
        session.touch();
        Ok(())
    })
}

/// Epoch of the current document, for tagging collaborator requests
#[wasm_bindgen(js_name = documentEpoch)]
pub fn document_epoch() -> Result<u32, JsValue> {
    with_session(|session| Ok(session.state.epoch as u32))
}

/// Ask whether a debounced save is due; marks it in flight when so
///
/// Returns the save payload for the host to write, or `null` when
/// nothing is due.
#[wasm_bindgen(js_name = pollAutosave)]
pub fn poll_autosave() -> Result<JsValue, JsValue> {
    with_session(|session| {
        if !session.autosave.poll(now_ms()) {
            return Ok(JsValue::NULL);
        }
        let request = SaveRequest {
            project_id: session.project_id.clone(),
            data: ProjectData {
                name: session.state.document.name.clone(),
                lines: session.state.document.lines.clone(),
            },
        };
        serialize(&request, "serialize save request")
    })
}

/// The host finished (or failed) the issued save
#[wasm_bindgen(js_name = autosaveFinished)]
pub fn autosave_finished(success: bool) -> Result<(), JsValue> {
    with_session(|session| {
        session.autosave.save_finished(now_ms(), success);
        Ok(())
    })
}

/// The store assigned an id to a newly created project
#[wasm_bindgen(js_name = projectCreated)]
pub fn project_created(project_id: &str) -> Result<(), JsValue> {
    with_session(|session| {
        session.project_id = Some(project_id.to_string());
        Ok(())
    })
}
