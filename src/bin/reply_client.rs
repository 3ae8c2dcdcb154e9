use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;

use reply_assistant_core::client::form::{
    parse_max_words, submit_draft, submit_summary, DraftForm, Language, SummaryForm, Tone,
    MAX_WORDS_DEFAULT,
};
use reply_assistant_core::client::{GatewayClient, DEFAULT_BACKEND_URL};
use reply_assistant_core::logging::init_tracing;

/// Paste a conversation, pick a tone, get a human-quality draft. Nothing is sent for you.
#[derive(Debug, Parser)]
#[command(name = "reply-client", version)]
struct Cli {
    /// Gateway base URL
    #[arg(long, global = true, env = "REPLY_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Seconds to wait for the draft or summary
    #[arg(long, global = true, default_value_t = 120)]
    timeout_secs: u64,

    /// Seconds to wait for the wake-up probe
    #[arg(long, global = true, default_value_t = 30)]
    probe_timeout_secs: u64,

    /// Skip the wake-up probe against /health
    #[arg(long, global = true)]
    no_warm_up: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Draft a reply to a conversation
    Suggest(SuggestArgs),
    /// Summarize a conversation in bullets
    Summarize(SummarizeArgs),
}

#[derive(Debug, Args)]
struct SuggestArgs {
    /// File holding the conversation; reads stdin when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[arg(long, value_enum, ignore_case = true, default_value_t = Tone::Friendly)]
    tone: Tone,

    #[arg(long, value_enum, ignore_case = true, default_value_t = Language::English)]
    language: Language,

    /// 60 to 300, in steps of 10
    #[arg(long, value_parser = parse_max_words, default_value_t = MAX_WORDS_DEFAULT)]
    max_words: u32,

    /// Also write the draft here for editing
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct SummarizeArgs {
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[arg(long, value_enum, ignore_case = true, default_value_t = Language::English)]
    language: Language,

    #[arg(long, default_value_t = 5)]
    bullets: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = init_tracing("info", None);
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = GatewayClient::new(
        &cli.backend_url,
        Duration::from_secs(cli.timeout_secs),
        Duration::from_secs(cli.probe_timeout_secs),
    )?;
    let warm_up = !cli.no_warm_up;

    match cli.command {
        Command::Suggest(args) => {
            let form = DraftForm {
                conversation: read_input(args.file.as_deref()).await?,
                tone: args.tone,
                language: args.language,
                max_words: args.max_words,
            };
            let draft = submit_draft(&client, &form, warm_up).await?;

            println!("Draft Reply\n-----------\n{draft}");
            if let Some(path) = args.output {
                tokio::fs::write(&path, &draft)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!("Draft saved to {}. Edit it before sending.", path.display());
            }
        }
        Command::Summarize(args) => {
            let form = SummaryForm {
                text: read_input(args.file.as_deref()).await?,
                language: args.language,
                bullets: args.bullets,
            };
            let summary = submit_summary(&client, &form, warm_up).await?;
            println!("Summary\n-------\n{summary}");
        }
    }

    Ok(())
}

async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read conversation from stdin")?;
            Ok(buf)
        }
    }
}
