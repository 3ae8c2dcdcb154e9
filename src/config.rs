use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Gateway settings, read once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Secret key for the completion provider.
    pub api_key: String,
    /// Model identifier (e.g., gpt-4o-mini).
    pub model: String,
    /// Provider base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Upstream request timeout in milliseconds.
    pub timeout_ms: u64,
    pub host: String,
    pub port: u16,
    /// Optional directory for rolling log files.
    pub log_dir: Option<PathBuf>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).and_then(normalize_string);

        let api_key = get("OPENAI_API_KEY")
            .ok_or_else(|| anyhow!("Missing OPENAI_API_KEY in environment. Set it in .env"))?;

        let timeout_ms = match get("OPENAI_TIMEOUT_MS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("OPENAI_TIMEOUT_MS must be a positive integer, got {v:?}"))?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let port = match get("PORT") {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {v:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_ms,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_dir: get("REPLY_ASSISTANT_LOG_DIR").map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Mask the key for safe display (keeps last 4 chars).
    pub fn masked_api_key(&self) -> String {
        let k = &self.api_key;
        if k.chars().count() <= 8 {
            "***".into()
        } else {
            let mut tail: Vec<char> = k.chars().rev().take(4).collect();
            tail.reverse();
            format!("***{}", tail.into_iter().collect::<String>())
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: 5_000,
            host: "127.0.0.1".to_string(),
            port: 0,
            log_dir: None,
        }
    }
}

fn normalize_string(v: String) -> Option<String> {
    let s = v.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
