//! Tests for the filesystem storage backend.

use storyteller_core::StorageScope;
use storyteller_error::StorytellerErrorKind;
use storyteller_storage::{CredentialStore, FileSystemStore, KeyValueStore, StorageErrorKind};
use tempfile::TempDir;

#[test]
fn test_creates_missing_directory() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let nested = temp_dir.path().join("config").join("storyteller");

    let store = FileSystemStore::new(&nested)?;

    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.as_path());
    Ok(())
}

#[test]
fn test_durable_document_is_json() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemStore::new(temp_dir.path())?;

    store.set(StorageScope::Durable, "GEMINI_API_KEY", "AIzaOne")?;
    store.set(StorageScope::Durable, "OTHER", "two")?;

    let raw = std::fs::read_to_string(temp_dir.path().join("credentials.json"))?;
    let document: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(document["GEMINI_API_KEY"], "AIzaOne");
    assert_eq!(document["OTHER"], "two");
    assert!(!temp_dir.path().join("credentials.json.tmp").exists());
    Ok(())
}

#[test]
fn test_overwrite_replaces_value() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemStore::new(temp_dir.path())?;

    store.set(StorageScope::Durable, "GEMINI_API_KEY", "AIzaOld")?;
    store.set(StorageScope::Durable, "GEMINI_API_KEY", "AIzaNew")?;

    assert_eq!(
        store.get(StorageScope::Durable, "GEMINI_API_KEY")?,
        Some("AIzaNew".to_string())
    );
    Ok(())
}

#[test]
fn test_session_writes_never_touch_disk() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemStore::new(temp_dir.path())?;

    store.set(StorageScope::Session, "GEMINI_API_KEY_TEMP", "AIzaSession")?;

    assert!(!temp_dir.path().join("credentials.json").exists());
    assert_eq!(
        store.get(StorageScope::Durable, "GEMINI_API_KEY_TEMP")?,
        None
    );
    Ok(())
}

#[test]
fn test_corrupt_document_is_reported() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("credentials.json"), "{not json")?;
    let store = FileSystemStore::new(temp_dir.path())?;

    let err = store
        .get(StorageScope::Durable, "GEMINI_API_KEY")
        .unwrap_err();

    match err.kind() {
        StorytellerErrorKind::Storage(storage) => {
            assert!(matches!(storage.kind, StorageErrorKind::Corrupt(_)));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_durable_write_replaces_corrupt_document() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("credentials.json"), "{not json")?;
    let credentials = CredentialStore::new(FileSystemStore::new(temp_dir.path())?);
    assert!(credentials.resolve().is_none());

    credentials.persist("AIzaNew", true)?;

    assert_eq!(credentials.resolve().unwrap().expose(), "AIzaNew");
    assert_eq!(
        credentials.store().get(StorageScope::Durable, "GEMINI_API_KEY")?,
        Some("AIzaNew".to_string())
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_durable_document_is_owner_only() -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new()?;
    let store = FileSystemStore::new(temp_dir.path())?;
    store.set(StorageScope::Durable, "GEMINI_API_KEY", "AIzaOne")?;

    let mode = std::fs::metadata(temp_dir.path().join("credentials.json"))?
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_stale_temp_file_does_not_loosen_permissions() -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new()?;
    let stale = temp_dir.path().join("credentials.json.tmp");
    std::fs::write(&stale, "{}")?;
    std::fs::set_permissions(&stale, std::fs::Permissions::from_mode(0o644))?;
    let store = FileSystemStore::new(temp_dir.path())?;

    store.set(StorageScope::Durable, "GEMINI_API_KEY", "AIzaOne")?;

    let mode = std::fs::metadata(temp_dir.path().join("credentials.json"))?
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
    assert!(!stale.exists());
    Ok(())
}
