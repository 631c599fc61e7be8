//! Assistant collaborator boundary
//!
//! The text-generation service is consumed behind the `TextGenerator`
//! trait; this module builds its prompts and interprets its replies,
//! which are either free prose or a constrained JSON edit script
//! applied to the document atomically.

pub mod prompt;
pub mod script;

use thiserror::Error;

pub use prompt::build_prompt;
pub use script::{apply_edit_script, parse_reply, AssistantReply, EditScript, ScriptEdit};

/// Shown when a structured reply cannot be interpreted
pub const COULD_NOT_PROCESS: &str = "Sorry, I couldn't process that edit request.";

/// External text-generation capability
///
/// Used both for free-text answers and for constrained edit-script
/// responses; the distinction is made when parsing the reply.
pub trait TextGenerator {
    fn generate(&mut self, prompt: &str) -> Result<String, AssistantError>;
}

/// Assistant boundary errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssistantError {
    /// The generation call itself failed (network, quota)
    #[error("generation failed: {0}")]
    GenerationFailed(String),

    /// An edit referenced a line id not present in the document
    #[error("edit references unknown line id: {0}")]
    UnknownLine(String),

    /// The reply arrived for a document that has been replaced
    #[error("reply discarded: the document it applied to is gone")]
    StaleReply,
}
