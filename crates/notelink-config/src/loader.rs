//! Loading configuration from TOML

use std::path::Path;

use crate::components::NoteLinkConfig;
use crate::error::ConfigResult;

/// Loads and validates [`NoteLinkConfig`]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read a TOML file; missing sections and fields fall back to defaults
    pub async fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<NoteLinkConfig> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded notelink config");
        Ok(config)
    }

    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<NoteLinkConfig> {
        let config: NoteLinkConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file if it exists, otherwise use defaults
    pub async fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<NoteLinkConfig> {
        let path = path.as_ref();
        if tokio::fs::try_exists(path).await? {
            Self::load_from_file(path).await
        } else {
            tracing::debug!(path = %path.display(), "no notelink config, using defaults");
            Ok(NoteLinkConfig::default())
        }
    }
}
