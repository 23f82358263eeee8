use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::catalog::LogoId;
use crate::config::AssetsConfig;

/// Reads logo assets from somewhere the server can reach synchronously
pub trait AssetSource: Send + Sync {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Local filesystem source
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSource;

impl AssetSource for FsAssetSource {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<S: AssetSource + ?Sized> AssetSource for Arc<S> {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        (**self).read_to_string(path)
    }
}

/// The two fixed logo mappings: server-local file and public web path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoAssetStorage {
    pub asset_dir: PathBuf,
    pub public_prefix: String,
}

impl LogoAssetStorage {
    pub fn new(asset_dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            public_prefix: public_prefix.into(),
        }
    }

    pub fn from_config(config: &AssetsConfig) -> Self {
        Self::new(config.asset_dir.clone(), config.public_prefix.clone())
    }

    /// Server-local file for a logo
    pub fn asset_path(&self, id: LogoId) -> PathBuf {
        self.asset_dir.join(id.file_name())
    }

    /// Web path for a logo, e.g. `/assets/guidenai-dark.svg`
    pub fn public_path(&self, id: LogoId) -> String {
        format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            id.file_name()
        )
    }
}

impl Default for LogoAssetStorage {
    fn default() -> Self {
        Self::from_config(&AssetsConfig::default())
    }
}
