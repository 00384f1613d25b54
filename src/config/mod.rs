mod defaults;
mod types;

pub use defaults::default_config_path;
pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_sec: default_timeout_sec(),
            json_format: default_true(),
            temperature: None,
            concurrency: default_concurrency(),
            min_content_chars: default_min_content_chars(),
            prompts: PromptsConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config, falling back to defaults when the default file is absent.
    /// An explicitly given path must exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path == default_config_path() && !path.exists() {
            tracing::debug!("No {:?} found, using built-in defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "model",
                reason: "must not be empty".to_string(),
            });
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "base_url",
                reason: format!("'{}' must start with http:// or https://", self.base_url),
            });
        }

        if self.timeout_sec == 0 {
            return Err(ConfigError::Invalid {
                field: "timeout_sec",
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.concurrency == 0 {
            return Err(ConfigError::Invalid {
                field: "concurrency",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
