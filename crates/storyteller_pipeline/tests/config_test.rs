//! Configuration loading tests.

use std::io::Write;
use std::path::PathBuf;

use storyteller_error::StorytellerErrorKind;
use storyteller_pipeline::StorytellerConfig;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_bundled_defaults() -> anyhow::Result<()> {
    let config = StorytellerConfig::bundled()?;

    assert_eq!(config.model().name(), "gemini-2.0-flash-exp");
    assert_eq!(
        config.model().api_base_url(),
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert!(config.storage().path().is_empty());
    Ok(())
}

#[test]
fn test_file_overrides_only_what_it_sets() -> anyhow::Result<()> {
    let file = toml_file("[model]\nname = \"gemini-2.0-flash\"\n")?;

    let config = StorytellerConfig::from_file(file.path())?;

    assert_eq!(config.model().name(), "gemini-2.0-flash");
    assert_eq!(
        config.model().api_base_url(),
        "https://generativelanguage.googleapis.com/v1beta"
    );
    Ok(())
}

#[test]
fn test_configured_storage_path_wins() -> anyhow::Result<()> {
    let file = toml_file("[storage]\npath = \"/tmp/storyteller-test\"\n")?;

    let config = StorytellerConfig::from_file(file.path())?;

    assert_eq!(
        config.credential_dir()?,
        PathBuf::from("/tmp/storyteller-test")
    );
    Ok(())
}

#[test]
fn test_empty_model_name_rejected() -> anyhow::Result<()> {
    let file = toml_file("[model]\nname = \"  \"\n")?;

    let err = StorytellerConfig::from_file(file.path()).unwrap_err();

    match err.kind() {
        StorytellerErrorKind::Config(e) => assert!(e.message.contains("model.name")),
        other => panic!("unexpected error kind: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let err = StorytellerConfig::from_file("/nonexistent/storyteller.toml").unwrap_err();

    assert!(matches!(err.kind(), StorytellerErrorKind::Config(_)));
}

#[test]
fn test_invalid_toml_is_config_error() -> anyhow::Result<()> {
    let file = toml_file("[model\nname = ")?;

    let err = StorytellerConfig::from_file(file.path()).unwrap_err();

    assert!(matches!(err.kind(), StorytellerErrorKind::Config(_)));
    Ok(())
}
