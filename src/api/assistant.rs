//! Assistant conversation API
//!
//! The generation call itself lives with the host; the WASM side
//! builds prompts against the canonical document, keeps the
//! conversation, and interprets replies (applying structured edit
//! scripts atomically, discarding stale ones).

use wasm_bindgen::prelude::*;

use crate::ai::build_prompt;
use crate::models::messages::{ConversationMessage, MessageRole};

use super::core::with_session;
use super::helpers::{deserialize, serialize};
use super::types::PromptRequest;

/// Record a user request and build the generation prompt for it
///
/// The returned epoch must be echoed back to `acceptAssistantReply`
/// so a reply that outlives its document gets discarded.
#[wasm_bindgen(js_name = askAssistant)]
pub fn ask_assistant(request: &str) -> Result<JsValue, JsValue> {
    with_session(|session| {
        session.push_message(request, MessageRole::User);
        let prompt = build_prompt(&session.state.document, &session.conversation, request);
        serialize(
            &PromptRequest {
                prompt,
                epoch: session.state.epoch as u32,
            },
            "serialize prompt request",
        )
    })
}

/// Interpret a raw generator reply
///
/// Applies a well-formed edit script atomically; degrades malformed
/// structured replies to a plain message; discards replies whose epoch
/// no longer matches the loaded document.
#[wasm_bindgen(js_name = acceptAssistantReply)]
pub fn accept_assistant_reply(epoch: u32, raw: &str) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let outcome = session.accept_reply(epoch as u64, raw);
        serialize(&outcome, "serialize assistant outcome")
    })
}

/// The conversation message list, oldest first
#[wasm_bindgen(js_name = conversationMessages)]
pub fn conversation_messages() -> Result<JsValue, JsValue> {
    with_session(|session| serialize(&session.conversation, "serialize conversation"))
}

/// Replace the conversation with messages loaded from the store
#[wasm_bindgen(js_name = loadConversation)]
pub fn load_conversation(messages: JsValue) -> Result<(), JsValue> {
    let messages: Vec<ConversationMessage> = deserialize(messages, "deserialize conversation")?;
    with_session(|session| {
        session.set_conversation(messages);
        Ok(())
    })
}
