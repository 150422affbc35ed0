//! API key command handler.

use storyteller::{
    ConfigError, CredentialStore, DURABLE_KEY, FileSystemStore, KeyValueStore, StorageScope,
    StorytellerResult,
};
use tracing::warn;

use super::KeyCommands;

const KEY_PREFIX: &str = "AIza";

/// Trim a user-entered key and reject blanks.
///
/// Keys without the usual `AIza` prefix are accepted with a warning; Gemini
/// is the final judge.
pub fn normalize_key(raw: &str) -> StorytellerResult<String> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(ConfigError::new("API key must not be empty").into());
    }
    if !key.starts_with(KEY_PREFIX) {
        warn!("API key does not start with \"{}\"", KEY_PREFIX);
        eprintln!("warning: Gemini API keys normally start with \"{KEY_PREFIX}\"");
    }
    Ok(key.to_string())
}

/// Handle `storyteller key ...`.
pub fn handle_key_command(
    command: KeyCommands,
    credentials: &CredentialStore<FileSystemStore>,
) -> StorytellerResult<()> {
    match command {
        KeyCommands::Set { key, remember } => {
            let key = normalize_key(&key)?;
            credentials.persist(&key, remember)?;
            if remember {
                println!(
                    "API key saved to {}",
                    credentials.store().base_path().join("credentials.json").display()
                );
            } else {
                println!("API key set for this invocation only; pass --remember to keep it");
            }
        }
        KeyCommands::Status => match credentials.resolved_scope() {
            Some(StorageScope::Durable) => println!(
                "API key: stored ({})",
                credentials.store().base_path().join("credentials.json").display()
            ),
            Some(StorageScope::Session) => {
                println!("API key: this invocation only (--api-key or GEMINI_API_KEY)")
            }
            None => {
                println!("API key: not configured (run `storyteller key set <KEY> --remember`)")
            }
        },
    }
    Ok(())
}

/// Put a per-invocation key in the session scope.
///
/// A stored durable key still takes precedence; that case is reported.
pub fn seed_session_key(
    credentials: &CredentialStore<FileSystemStore>,
    raw: &str,
) -> StorytellerResult<()> {
    let key = normalize_key(raw)?;
    credentials.persist(&key, false)?;

    let durable = credentials.store().get(StorageScope::Durable, DURABLE_KEY)?;
    if durable.is_some_and(|stored| !stored.is_empty() && stored != key) {
        warn!("Stored API key takes precedence over --api-key / GEMINI_API_KEY");
    }
    Ok(())
}
