//! Data models for the screenplay editor

pub mod core;
pub mod editor_state;
pub mod elements;
pub mod messages;

pub use self::core::{document_from_json, Document, Line, LineId, StructureError};
pub use editor_state::EditorState;
pub use elements::{Alignment, LineLayout, LineStyle, ALL_STYLES};
pub use messages::{ConversationMessage, MessageRole};
