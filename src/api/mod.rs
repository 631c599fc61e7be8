//! Screenplay Editor WASM API
//!
//! This module provides the JavaScript-facing API for the screenplay
//! editor. It includes shared utilities for serialization, validation,
//! and error handling, as well as the API functions organized by
//! functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error handling, and console logging
//! - `types`: result shapes crossing the JS boundary
//! - `core`: session lifecycle, document load/save, autosave handshake
//! - `lines`: split/merge/text editing operations
//! - `selection`: click, shift-click, and drag selection events
//! - `format`: style application and active-tool derivation
//! - `table_read`: speech playback control
//! - `assistant`: conversation and edit-script handling

pub mod assistant;
pub mod core;
pub mod format;
pub mod helpers;
pub mod lines;
pub mod selection;
pub mod table_read;
pub mod types;

pub use assistant::{accept_assistant_reply, ask_assistant, conversation_messages, load_conversation};
pub use self::core::{
    autosave_finished, document_epoch, get_document, load_project, new_project, poll_autosave,
    project_created, set_project_name,
};
pub use format::{active_style, apply_style};
pub use lines::{backspace_at_boundary, set_line_text, split_line};
pub use selection::{drag_end, drag_over, drag_start, get_selection, line_click};
pub use table_read::{current_speaking_line, start_table_read, stop_table_read};
