//! Scripted `CompletionProvider` used by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::llm_chat_service::{CompletionProvider, UpstreamError};
use crate::domain::llm::dto::llm_chat_request::{CompletionOptions, LlmMessage};

pub struct StubProvider {
    reply: Result<String, String>,
    pub calls: Mutex<Vec<(Vec<LlmMessage>, CompletionOptions)>>,
}

impl StubProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(description: &str) -> Self {
        Self {
            reply: Err(description.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<(Vec<LlmMessage>, CompletionOptions)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(
        &self,
        messages: Vec<LlmMessage>,
        options: CompletionOptions,
    ) -> Result<String, UpstreamError> {
        self.calls.lock().unwrap().push((messages, options));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(desc) => Err(UpstreamError::Transport(desc.clone())),
        }
    }
}
