use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::assistant::dto::suggest_reply_request::{SuggestReplyRequest, SuggestReplyResponse};
use crate::domain::assistant::prompts::{reply_messages, REPLY_OPTIONS};
use crate::domain::llm::service::llm_chat_service::CompletionProvider;
use crate::errors::AppError;

/// Draft one reply for the pasted conversation.
pub async fn suggest_reply(
    provider: &dyn CompletionProvider,
    req: SuggestReplyRequest,
) -> Result<SuggestReplyResponse, AppError> {
    req.validate()?;

    let conversation = req.conversation.trim();
    if conversation.is_empty() {
        return Err(AppError::InvalidInput("Conversation is empty".into()));
    }

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        chars = conversation.chars().count(),
        tone = %req.tone,
        language = %req.language,
        max_words = req.max_words,
        "suggest_reply"
    );

    let messages = reply_messages(conversation, &req.language, &req.tone, req.max_words);
    let text = provider.complete(messages, REPLY_OPTIONS).await.map_err(|e| {
        warn!(%request_id, error = %e, "suggest_reply upstream failure");
        AppError::from(e)
    })?;

    Ok(SuggestReplyResponse {
        reply_text: text.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::service::stub_provider::StubProvider;

    fn request(conversation: &str, max_words: i64) -> SuggestReplyRequest {
        SuggestReplyRequest {
            conversation: conversation.into(),
            tone: "formal".into(),
            language: "English".into(),
            max_words,
        }
    }

    #[tokio::test]
    async fn blank_conversation_never_reaches_upstream() {
        let stub = StubProvider::replying("unused");
        for blank in ["", "   ", "\n\t \n"] {
            let err = suggest_reply(&stub, request(blank, 120)).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(ref m) if m == "Conversation is empty"));
        }
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn out_of_range_max_words_is_rejected_before_upstream() {
        let stub = StubProvider::replying("unused");
        for n in [0, 29, 401, 1000] {
            let err = suggest_reply(&stub, request("Hello", n)).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
        }
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn boundary_max_words_are_accepted() {
        let stub = StubProvider::replying("ok");
        assert!(suggest_reply(&stub, request("Hello", 30)).await.is_ok());
        assert!(suggest_reply(&stub, request("Hello", 400)).await.is_ok());
        assert_eq!(stub.call_count(), 2);
    }

    #[tokio::test]
    async fn prompt_embeds_trimmed_input_and_options() {
        let stub = StubProvider::replying("  Sounds good, talk Monday.  ");
        let req = SuggestReplyRequest {
            conversation: "\n  Can we meet Monday?  \n".into(),
            tone: "enthusiastic".into(),
            language: "Hindi".into(),
            max_words: 75,
        };

        let resp = suggest_reply(&stub, req).await.unwrap();
        assert_eq!(resp.reply_text, "Sounds good, talk Monday.");

        let (messages, options) = stub.last_call().unwrap();
        assert_eq!(options, REPLY_OPTIONS);
        assert_eq!(options.max_tokens, 500);
        let user = &messages[1].content;
        assert!(user.contains("---\nCan we meet Monday?\n---"));
        assert!(user.contains("Write a single reply in Hindi. Tone: enthusiastic."));
        assert!(user.contains("Aim for under 75 words"));
    }

    #[tokio::test]
    async fn upstream_failure_carries_description_without_retry() {
        let stub = StubProvider::failing("Error code: 429 - quota exceeded");
        let err = suggest_reply(&stub, request("Hello", 120)).await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamFailure(ref m) if m == "Error code: 429 - quota exceeded"));
        assert_eq!(stub.call_count(), 1);
    }
}
