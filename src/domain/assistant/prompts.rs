//! Prompt templates for reply drafting and summarization.

use crate::domain::llm::dto::llm_chat_request::{CompletionOptions, LlmMessage};

pub const REPLY_SYSTEM_PROMPT: &str = "\
You are a helpful assistant that drafts replies to LinkedIn messages on behalf of the user.
Write as the user, in the first person, and sound like a real professional rather than a bot.
Stay faithful to the conversation: answer what was asked, do not invent facts, dates, prices or commitments.
Keep the reply ready to send: no subject line, no placeholders, no commentary about the draft.
Never include links, phone numbers or email addresses unless they already appear in the conversation.";

pub const SUMMARY_SYSTEM_PROMPT: &str = "You summarize LinkedIn conversations crisply in bullets.";

pub const REPLY_OPTIONS: CompletionOptions = CompletionOptions::new(0.5, 500);
pub const SUMMARY_OPTIONS: CompletionOptions = CompletionOptions::new(0.4, 400);

/// System + user messages for a reply draft. `conversation` must already be trimmed.
pub fn reply_messages(conversation: &str, language: &str, tone: &str, max_words: i64) -> Vec<LlmMessage> {
    let user = format!(
        "Conversation:\n---\n{conversation}\n---\nWrite a single reply in {language}. Tone: {tone}.\nAim for under {max_words} words unless brevity harms clarity.\n"
    );
    vec![LlmMessage::system(REPLY_SYSTEM_PROMPT), LlmMessage::user(user)]
}

pub fn summary_messages(text: &str, language: &str, bullets: i64) -> Vec<LlmMessage> {
    let user = format!("Summarize in {language} as {bullets} bullets:\n{text}");
    vec![LlmMessage::system(SUMMARY_SYSTEM_PROMPT), LlmMessage::user(user)]
}
