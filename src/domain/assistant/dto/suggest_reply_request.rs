use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MIN_MAX_WORDS: i64 = 30;
pub const MAX_MAX_WORDS: i64 = 400;

/// Draft-a-reply payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestReplyRequest {
    /// Conversation text or last message.
    pub conversation: String,
    /// e.g., friendly, formal, concise
    #[serde(default = "default_tone")]
    pub tone: String,
    /// Language to write the reply in.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_max_words")]
    #[validate(range(min = MIN_MAX_WORDS, max = MAX_MAX_WORDS))]
    pub max_words: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestReplyResponse {
    pub reply_text: String,
}

fn default_tone() -> String {
    "neutral".into()
}

pub(crate) fn default_language() -> String {
    "English".into()
}

fn default_max_words() -> i64 {
    120
}
