use serde::Deserialize;

/// Subset of the chat completion response we read back.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmChatResponse {
    #[serde(default)]
    pub choices: Vec<LlmChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmChoice {
    pub message: LlmChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl LlmChatResponse {
    /// Content of the first choice, trimmed.
    pub fn first_content(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(|s| s.trim().to_string())
    }
}
