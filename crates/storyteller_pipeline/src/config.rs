//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`storyteller.toml` compiled in)
//! 2. `~/.config/storyteller/storyteller.toml`
//! 3. `./storyteller.toml`
//! 4. `STORYTELLER__*` environment variables (`STORYTELLER__MODEL__NAME`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storyteller_error::{ConfigError, StorytellerResult};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storyteller.toml");

/// Provider model settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ModelConfig {
    /// Model identifier used by every stage
    name: String,
    /// REST base URL, up to and including the API version segment
    api_base_url: String,
}

/// Credential storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct StorageConfig {
    /// Directory for `credentials.json`; empty selects the platform config dir
    #[serde(default)]
    path: String,
}

/// Top-level Storyteller configuration.
///
/// # Example
///
/// ```no_run
/// use storyteller_pipeline::StorytellerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StorytellerConfig::load()?;
/// println!("model: {}", config.model().name());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StorytellerConfig {
    /// Provider model settings
    model: ModelConfig,
    /// Credential storage settings
    #[serde(default)]
    storage: StorageConfig,
}

impl StorytellerConfig {
    /// The compiled-in defaults alone.
    ///
    /// # Errors
    ///
    /// Returns error if the bundled document is invalid.
    pub fn bundled() -> StorytellerResult<Self> {
        Self::finish(defaults())
    }

    /// Bundled defaults overridden by a single file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StorytellerResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(defaults().add_source(File::from(path.as_ref())))
    }

    /// Load every layer.
    ///
    /// User files are optional and skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns error if a present source cannot be parsed or the result is
    /// invalid.
    #[instrument]
    pub fn load() -> StorytellerResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder = defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyteller/storyteller.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("storyteller").required(false))
            .add_source(Environment::with_prefix("STORYTELLER").separator("__"));

        Self::finish(builder)
    }

    /// Directory the credential store lives in.
    ///
    /// `storage.path` when set, otherwise `<config dir>/storyteller`.
    ///
    /// # Errors
    ///
    /// Returns error if no path is configured and the platform has no config
    /// directory.
    pub fn credential_dir(&self) -> StorytellerResult<PathBuf> {
        let configured = self.storage.path.trim();
        if !configured.is_empty() {
            return Ok(PathBuf::from(configured));
        }

        dirs::config_dir()
            .map(|dir| dir.join("storyteller"))
            .ok_or_else(|| {
                ConfigError::new("No config directory on this platform; set storage.path").into()
            })
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> StorytellerResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.model.name.trim().is_empty() {
            return Err(ConfigError::new("model.name must not be empty"));
        }
        if self.model.api_base_url.trim().is_empty() {
            return Err(ConfigError::new("model.api_base_url must not be empty"));
        }
        Ok(())
    }
}

fn defaults() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}
