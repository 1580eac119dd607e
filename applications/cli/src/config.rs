/// Shell configuration
use crate::error::{CliError, Result};
use encore_playback::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "encore.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    pub engine: EngineConfig,

    /// Start with the built-in ten-song catalog
    pub seed_catalog: bool,

    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            seed_catalog: true,
            prompt: "encore> ".to_string(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `encore.toml` in the working
    /// directory is used if present. `ENCORE_*` variables override the file,
    /// with `__` separating nested keys (`ENCORE_ENGINE__HISTORY_SIZE=50`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ENCORE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}
