use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::{AppError, AppResult};

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub authors: AuthorsConfig,
}

/// Where logo assets live on disk and where the web server exposes them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Server-local directory holding `<logo>.svg` files
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
    /// Web path prefix used for client references and fallbacks
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorsConfig {
    /// Avatar used for author names missing from the directory
    #[serde(default = "default_author_avatar")]
    pub default_avatar: String,
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ASSET_DIR)
}

fn default_public_prefix() -> String {
    DEFAULT_PUBLIC_PREFIX.to_string()
}

fn default_author_avatar() -> String {
    DEFAULT_AUTHOR_AVATAR.to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            asset_dir: default_asset_dir(),
            public_prefix: default_public_prefix(),
        }
    }
}

impl Default for AuthorsConfig {
    fn default() -> Self {
        Self {
            default_avatar: default_author_avatar(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_file(config_file: impl AsRef<Path>) -> AppResult<Self> {
        let config_file = config_file.as_ref();
        if config_file.exists() {
            let contents = std::fs::read_to_string(config_file)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            info!("Configuration loaded from: {}", config_file.display());
            Ok(config)
        } else {
            info!(
                "No config file at {}, using defaults",
                config_file.display()
            );
            Ok(Self::default())
        }
    }

    fn validate(&self) -> AppResult<()> {
        if !self.assets.public_prefix.starts_with('/') {
            return Err(AppError::Configuration {
                message: format!(
                    "assets.public_prefix must start with '/', got '{}'",
                    self.assets.public_prefix
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_file(temp_dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.assets.asset_dir, PathBuf::from("public/assets"));
        assert_eq!(config.assets.public_prefix, "/assets");
        assert!(!temp_dir.path().join("absent.toml").exists());
    }

    #[test]
    fn test_partial_file_keeps_field_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("og-preview.toml");
        std::fs::write(&path, "[assets]\nasset_dir = \"static/logos\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.assets.asset_dir, PathBuf::from("static/logos"));
        assert_eq!(config.assets.public_prefix, "/assets");
        assert_eq!(config.authors.default_avatar, DEFAULT_AUTHOR_AVATAR);
    }

    #[test]
    fn test_relative_prefix_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("og-preview.toml");
        std::fs::write(&path, "[assets]\npublic_prefix = \"assets\"\n").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Configuration { .. }));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("og-preview.toml");
        std::fs::write(&path, "[assets\n").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(AppError::Toml(_))
        ));
    }
}
