//! Filesystem-backed credential store.
//!
//! The durable scope is a single JSON object on disk; the session scope lives
//! in memory and disappears with the process.

use crate::KeyValueStore;
use std::collections::{BTreeMap, HashMap};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use storyteller_core::StorageScope;
use storyteller_error::{StorageError, StorageErrorKind, StorytellerResult};

const DURABLE_FILE: &str = "credentials.json";

/// Filesystem storage backend.
///
/// Layout:
///
/// ```text
/// ~/.config/storyteller/
/// └── credentials.json   {"GEMINI_API_KEY": "..."}
/// ```
///
/// Writes go through a temp file + rename so a crash never leaves a
/// half-written document. On unix the temp file is created with mode 0600.
/// A document that no longer parses is replaced by the next durable write.
pub struct FileSystemStore {
    base_path: PathBuf,
    session: Mutex<HashMap<String, String>>,
    durable_lock: Mutex<()>,
}

impl std::fmt::Debug for FileSystemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSystemStore")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

impl FileSystemStore {
    /// Create a new filesystem store rooted at `base_path`.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StorytellerResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Opened credential store");
        Ok(Self {
            base_path,
            session: Mutex::new(HashMap::new()),
            durable_lock: Mutex::new(()),
        })
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn durable_path(&self) -> PathBuf {
        self.base_path.join(DURABLE_FILE)
    }

    fn read_durable(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let path = self.durable_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })
    }

    fn write_durable(&self, entries: &BTreeMap<String, String>) -> StorytellerResult<()> {
        let path = self.durable_path();
        let temp_path = path.with_extension("json.tmp");

        let document = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::new(StorageErrorKind::FileWrite(e.to_string())))?;

        let write_error = |e: std::io::Error| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        };

        // mode only applies on creation
        match std::fs::remove_file(&temp_path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                return Err(write_error(e).into());
            }
            _ => {}
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&temp_path).map_err(write_error)?;
        file.write_all(document.as_bytes()).map_err(write_error)?;
        file.sync_all().map_err(write_error)?;
        drop(file);

        std::fs::rename(&temp_path, &path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        Ok(())
    }
}

impl KeyValueStore for FileSystemStore {
    #[tracing::instrument(skip(self), fields(path = %self.base_path.display()))]
    fn get(&self, scope: StorageScope, key: &str) -> StorytellerResult<Option<String>> {
        match scope {
            StorageScope::Durable => {
                let _guard = self
                    .durable_lock
                    .lock()
                    .map_err(|e| StorageError::new(StorageErrorKind::Unavailable(e.to_string())))?;
                Ok(self.read_durable()?.get(key).cloned())
            }
            StorageScope::Session => {
                let session = self
                    .session
                    .lock()
                    .map_err(|e| StorageError::new(StorageErrorKind::Unavailable(e.to_string())))?;
                Ok(session.get(key).cloned())
            }
        }
    }

    #[tracing::instrument(skip(self, value), fields(path = %self.base_path.display()))]
    fn set(&self, scope: StorageScope, key: &str, value: &str) -> StorytellerResult<()> {
        match scope {
            StorageScope::Durable => {
                let _guard = self
                    .durable_lock
                    .lock()
                    .map_err(|e| StorageError::new(StorageErrorKind::Unavailable(e.to_string())))?;
                let mut entries = match self.read_durable() {
                    Ok(entries) => entries,
                    Err(e) if matches!(e.kind, StorageErrorKind::Corrupt(_)) => {
                        tracing::warn!(error = %e, "Replacing unreadable credential document");
                        BTreeMap::new()
                    }
                    Err(e) => return Err(e.into()),
                };
                entries.insert(key.to_string(), value.to_string());
                self.write_durable(&entries)?;
                tracing::info!(key, "Stored durable entry");
            }
            StorageScope::Session => {
                let mut session = self
                    .session
                    .lock()
                    .map_err(|e| StorageError::new(StorageErrorKind::Unavailable(e.to_string())))?;
                session.insert(key.to_string(), value.to_string());
                tracing::debug!(key, "Stored session entry");
            }
        }
        Ok(())
    }
}
