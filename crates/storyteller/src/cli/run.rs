//! Pipeline command handlers.

use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use storyteller::{
    ConfigError, FileSystemStore, GeminiClient, GenerationError, GenerationErrorKind,
    ScriptPipeline, StorageError, StorageErrorKind, StorytellerConfig, StorytellerError,
    StorytellerResult, StudioSession,
};
use tracing::{info, instrument, warn};

use super::key::normalize_key;
use super::render::{render_analysis, render_json, render_script, render_topics};
use super::{ExportFormat, OutputFormat};

/// The pipeline the binary runs: Gemini over the file-backed credential store.
pub type GeminiPipeline = ScriptPipeline<GeminiClient, FileSystemStore>;

const KEY_HINT: &str =
    "API 키가 필요합니다: `storyteller key set <KEY> --remember` 또는 --api-key 를 사용하세요.";

/// Load configuration from `path`, or from the standard layers.
pub fn load_config(path: Option<&Path>) -> StorytellerResult<StorytellerConfig> {
    match path {
        Some(path) => StorytellerConfig::from_file(path),
        None => StorytellerConfig::load(),
    }
}

/// Build the pipeline described by `config`.
#[instrument(skip(config), fields(model = %config.model().name()))]
pub fn build_pipeline(config: &StorytellerConfig) -> StorytellerResult<GeminiPipeline> {
    let store = FileSystemStore::new(config.credential_dir()?)?;
    let client = GeminiClient::with_base_url(config.model().api_base_url())?;
    Ok(ScriptPipeline::new(client, store, config.model().name()))
}

/// Handle `storyteller analyze`.
pub async fn run_analyze(pipeline: &GeminiPipeline, format: OutputFormat) -> StorytellerResult<()> {
    let outcome = pipeline.analyze_trends().await;

    match format {
        OutputFormat::Human => print!("{}", render_analysis(&outcome)),
        OutputFormat::Json => println!("{}", render_json(outcome.analysis())?),
    }
    if outcome.needs_credential() {
        eprintln!("{KEY_HINT}");
    }
    Ok(())
}

/// Handle `storyteller topics`.
pub async fn run_topics(pipeline: &GeminiPipeline, format: OutputFormat) -> StorytellerResult<()> {
    let topics = pipeline.recommend_topics().await;

    match format {
        OutputFormat::Human if topics.is_empty() => {
            eprintln!("{}", storyteller::TOPICS_FAILED_MESSAGE)
        }
        OutputFormat::Human => print!("{}", render_topics(&topics)),
        OutputFormat::Json => println!("{}", render_json(&topics)?),
    }
    Ok(())
}

/// Handle `storyteller run`.
#[instrument(skip(pipeline))]
pub async fn run_studio(
    pipeline: GeminiPipeline,
    topic: Option<u64>,
    out: Option<PathBuf>,
    format: ExportFormat,
) -> StorytellerResult<()> {
    let mut session = StudioSession::new(pipeline);

    session.start().await?;
    if session.needs_credential() {
        ask_for_credential(&mut session).await?;
    }
    if let Some(analysis) = session.analysis() {
        eprint!("{}", render_analysis(analysis));
    }

    let topics = session.request_topics().await?;
    if topics.is_empty() {
        eprintln!("{}", session.error().unwrap_or(storyteller::TOPICS_FAILED_MESSAGE));
        return Ok(());
    }
    eprint!("{}", render_topics(topics));

    let index = match topic {
        Some(number) => usize::try_from(number - 1).unwrap_or(usize::MAX),
        None => choose_topic(topics.len()).ok_or_else(|| {
            ConfigError::new("No topic selected; pass --topic <N> when not running interactively")
        })?,
    };

    eprintln!("대본을 생성하는 중입니다...");
    let generated = session.select_topic(index).await.map(|_| ());
    if let Err(e) = generated {
        if let Some(message) = session.error() {
            eprintln!("{message}");
        }
        return Err(e);
    }
    let Some(script) = session.script() else {
        return Ok(());
    };
    info!(chars = script.script_length(), "Script ready");

    let rendered = render_script(script, format)?;
    match out {
        Some(path) => {
            std::fs::write(&path, rendered).map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            eprintln!("Script saved to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

async fn ask_for_credential(
    session: &mut StudioSession<GeminiClient, FileSystemStore>,
) -> StorytellerResult<()> {
    if let Some(message) = session.error() {
        eprintln!("{message}");
    }

    let Some(raw) = prompt_line("Gemini API key: ") else {
        eprintln!("{KEY_HINT}");
        return Err(credential_failure(session));
    };
    let key = normalize_key(&raw)?;
    let remember = prompt_line("이 키를 저장할까요? [y/N]: ")
        .is_some_and(|answer| matches!(answer.trim(), "y" | "Y" | "yes"));

    session.submit_credential(&key, remember).await?;
    if session.needs_credential() {
        return Err(credential_failure(session));
    }
    Ok(())
}

fn credential_failure(session: &StudioSession<GeminiClient, FileSystemStore>) -> StorytellerError {
    let kind = session
        .analysis()
        .and_then(|outcome| outcome.degraded_by().clone())
        .unwrap_or(GenerationErrorKind::MissingCredential);
    GenerationError::new(kind).into()
}

fn choose_topic(count: usize) -> Option<usize> {
    loop {
        let line = prompt_line(&format!("주제 번호를 선택하세요 (1-{count}): "))?;
        match line.trim().parse::<usize>() {
            Ok(number) if (1..=count).contains(&number) => return Some(number - 1),
            _ => eprintln!("1부터 {count} 사이의 번호를 입력하세요."),
        }
    }
}

/// Read one line from an interactive stdin; `None` when not a terminal or at EOF.
fn prompt_line(prompt: &str) -> Option<String> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return None;
    }

    eprint!("{prompt}");
    let _ = std::io::stderr().flush();

    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            warn!(error = %e, "Failed to read from stdin");
            None
        }
    }
}
