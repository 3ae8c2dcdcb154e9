//! The drafting form: choices offered to the user and the submit flow.

use clap::ValueEnum;
use thiserror::Error;
use tracing::info;

use super::{ClientError, GatewayClient};
use crate::domain::assistant::dto::suggest_reply_request::SuggestReplyRequest;
use crate::domain::assistant::dto::summarize_request::SummarizeRequest;

pub const MAX_WORDS_MIN: u32 = 60;
pub const MAX_WORDS_MAX: u32 = 300;
pub const MAX_WORDS_STEP: u32 = 10;
pub const MAX_WORDS_DEFAULT: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Tone {
    #[default]
    Friendly,
    Formal,
    Concise,
    Enthusiastic,
    Empathetic,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Concise => "concise",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Empathetic => "empathetic",
            Tone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    English,
    Urdu,
    Hindi,
    Arabic,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urdu => "Urdu",
            Language::Hindi => "Hindi",
            Language::Arabic => "Arabic",
        }
    }
}

/// Parse a max-words value the way the slider allows it: 60..=300 in steps of 10.
pub fn parse_max_words(s: &str) -> Result<u32, String> {
    let n: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a whole number"))?;
    if !(MAX_WORDS_MIN..=MAX_WORDS_MAX).contains(&n) {
        return Err(format!("max words must be between {MAX_WORDS_MIN} and {MAX_WORDS_MAX}"));
    }
    if n % MAX_WORDS_STEP != 0 {
        return Err(format!("max words must be a multiple of {MAX_WORDS_STEP}"));
    }
    Ok(n)
}

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("{0}")]
    EmptyInput(&'static str),

    #[error(transparent)]
    Client(#[from] ClientError),
}

#[derive(Debug, Clone)]
pub struct DraftForm {
    pub conversation: String,
    pub tone: Tone,
    pub language: Language,
    pub max_words: u32,
}

impl DraftForm {
    pub fn to_request(&self) -> Result<SuggestReplyRequest, DraftError> {
        if self.conversation.trim().is_empty() {
            return Err(DraftError::EmptyInput("Please paste some conversation text."));
        }
        Ok(SuggestReplyRequest {
            conversation: self.conversation.clone(),
            tone: self.tone.as_str().to_string(),
            language: self.language.as_str().to_string(),
            max_words: i64::from(self.max_words),
        })
    }
}

/// Validate locally, optionally wake the backend, then ask for a draft.
pub async fn submit_draft(
    client: &GatewayClient,
    form: &DraftForm,
    warm_up: bool,
) -> Result<String, DraftError> {
    let req = form.to_request()?;

    if warm_up {
        info!("Waking up backend, please wait...");
        client.warm_up().await;
    }

    info!("Generating reply...");
    let resp = client.suggest_reply(&req).await?;
    Ok(resp.reply_text)
}

#[derive(Debug, Clone)]
pub struct SummaryForm {
    pub text: String,
    pub language: Language,
    pub bullets: u32,
}

pub async fn submit_summary(
    client: &GatewayClient,
    form: &SummaryForm,
    warm_up: bool,
) -> Result<String, DraftError> {
    if form.text.trim().is_empty() {
        return Err(DraftError::EmptyInput("Please paste some text to summarize."));
    }
    let req = SummarizeRequest {
        text: form.text.clone(),
        language: form.language.as_str().to_string(),
        bullets: i64::from(form.bullets),
    };

    if warm_up {
        client.warm_up().await;
    }

    let resp = client.summarize(&req).await?;
    Ok(resp.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{spawn, spawn_gateway};
    use crate::domain::llm::service::stub_provider::StubProvider;
    use axum::{http::StatusCode, routing::{get, post}, Json, Router};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn form(conversation: &str) -> DraftForm {
        DraftForm {
            conversation: conversation.into(),
            tone: Tone::Formal,
            language: Language::Urdu,
            max_words: MAX_WORDS_DEFAULT,
        }
    }

    fn client(base: &str) -> GatewayClient {
        GatewayClient::new(base, Duration::from_secs(5), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn max_words_follows_slider_steps() {
        assert_eq!(parse_max_words("60"), Ok(60));
        assert_eq!(parse_max_words("300"), Ok(300));
        assert_eq!(parse_max_words(" 120 "), Ok(120));
        assert!(parse_max_words("50").is_err());
        assert!(parse_max_words("310").is_err());
        assert!(parse_max_words("125").is_err());
        assert!(parse_max_words("lots").is_err());
    }

    #[test]
    fn request_uses_wire_spellings() {
        let req = form("  Hello  ").to_request().unwrap();
        assert_eq!(req.tone, "formal");
        assert_eq!(req.language, "Urdu");
        assert_eq!(req.max_words, 120);
        assert_eq!(req.conversation, "  Hello  ");
    }

    #[tokio::test]
    async fn empty_conversation_makes_no_network_call() {
        let hits = Arc::new(AtomicUsize::new(0));
        let (h1, h2) = (hits.clone(), hits.clone());
        let router = Router::new()
            .route(
                "/health",
                get(move || {
                    let h1 = h1.clone();
                    async move {
                        h1.fetch_add(1, Ordering::SeqCst);
                        Json(json!({ "status": "ok" }))
                    }
                }),
            )
            .route(
                "/suggest_reply",
                post(move || {
                    let h2 = h2.clone();
                    async move {
                        h2.fetch_add(1, Ordering::SeqCst);
                        Json(json!({ "reply_text": "x" }))
                    }
                }),
            );
        let base = spawn(router).await;

        let err = submit_draft(&client(&base), &form(" \n "), true).await.unwrap_err();
        assert!(matches!(err, DraftError::EmptyInput(_)));
        assert_eq!(err.to_string(), "Please paste some conversation text.");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failing_probe_does_not_block_the_draft() {
        let router = Router::new()
            .route("/health", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route(
                "/suggest_reply",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({ "reply_text": format!("re: {}", body["conversation"].as_str().unwrap_or("")) }))
                }),
            );
        let base = spawn(router).await;

        let text = submit_draft(&client(&base), &form("Ping"), true).await.unwrap();
        assert_eq!(text, "re: Ping");
    }

    #[tokio::test]
    async fn slow_health_check_is_cut_short_by_probe_timeout() {
        let router = Router::new()
            .route(
                "/health",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Json(json!({ "status": "ok" }))
                }),
            )
            .route(
                "/suggest_reply",
                post(|| async { Json(json!({ "reply_text": "Sure, Tuesday works." })) }),
            );
        let base = spawn(router).await;

        let client =
            GatewayClient::new(&base, Duration::from_secs(10), Duration::from_millis(200)).unwrap();
        let started = std::time::Instant::now();
        let text = submit_draft(&client, &form("Tuesday?"), true).await.unwrap();

        assert_eq!(text, "Sure, Tuesday works.");
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn summary_goes_through_gateway() {
        let stub = Arc::new(StubProvider::replying("- point"));
        let base = spawn_gateway(stub.clone()).await;

        let summary_form = SummaryForm {
            text: "Long thread".into(),
            language: Language::English,
            bullets: 3,
        };
        let summary = submit_summary(&client(&base), &summary_form, false).await.unwrap();
        assert_eq!(summary, "- point");

        let (messages, _) = stub.last_call().unwrap();
        assert_eq!(messages[1].content, "Summarize in English as 3 bullets:\nLong thread");
    }
}
