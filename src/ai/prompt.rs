//! Prompt construction for the text-generation collaborator
//!
//! The prompt carries the full numbered script body (with ids and
//! styles, so the service can address lines), the running
//! conversation, and the reply-format contract.

use crate::models::core::Document;
use crate::models::messages::{ConversationMessage, MessageRole};

const REPLY_CONTRACT: &str = "\
When the request asks for changes to the script, respond with JSON only:\n\
{\"explanation\": \"<what you changed and why>\", \"edits\": [\n\
  {\"type\": \"replace\", \"lineId\": \"<id>\", \"newText\": \"...\", \"style\": \"<style>\"},\n\
  {\"type\": \"add\", \"newText\": \"...\", \"style\": \"<style>\", \"insertAfter\": \"<id>\"}\n\
]}\n\
Styles: location, action, character, dialogue, parenthetical, transition, general.\n\
Otherwise answer in plain prose.";

/// Build the generation prompt for a user request
pub fn build_prompt(
    doc: &Document,
    conversation: &[ConversationMessage],
    request: &str,
) -> String {
    let mut prompt = String::new();

    prompt.push_str("You are a screenwriting assistant working on the script \"");
    prompt.push_str(&doc.name);
    prompt.push_str("\".\n\nCurrent script:\n");
    for line in &doc.lines {
        prompt.push_str(&format!(
            "{} [{}] {}\n",
            line.id,
            line.style.name(),
            line.text
        ));
    }

    if !conversation.is_empty() {
        prompt.push_str("\nConversation so far:\n");
        for message in conversation {
            let who = match message.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
            };
            prompt.push_str(&format!("{}: {}\n", who, message.content));
        }
    }

    prompt.push_str("\nRequest: ");
    prompt.push_str(request);
    prompt.push_str("\n\n");
    prompt.push_str(REPLY_CONTRACT);
    prompt
}
