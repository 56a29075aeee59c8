pub mod constants;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use constants::{defaults, models};

/// Main configuration structure for rppgen, loaded from `rppgen.toml`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RppGenConfig {
    /// Generator settings (model, API key lookup).
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Gemini model ID used for generation.
    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    models::DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    defaults::API_KEY_ENV.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Loads and holds the configuration, remembering where it came from.
pub struct ConfigManager {
    config: RppGenConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the current working directory.
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Load configuration from a specific workspace directory.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let config_path = workspace.as_ref().join(defaults::CONFIG_FILE);
        if config_path.exists() {
            return Self::load_from_file(&config_path);
        }

        Ok(Self {
            config: RppGenConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: RppGenConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    pub fn config(&self) -> &RppGenConfig {
        &self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
