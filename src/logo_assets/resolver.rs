//! Context-aware logo resolution
//!
//! Server-rendered cards are rasterized without a web server, so their logos
//! have to be embedded as data URIs. Interactive previews load logos from the
//! public asset path like any other image.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumString};
use tracing::{debug, warn};

use super::cache::LogoCache;
use super::catalog::LogoId;
use super::storage::{AssetSource, FsAssetSource, LogoAssetStorage};
use crate::config::AssetsConfig;
use crate::errors::AssetError;
use crate::utils::data_uri::{self, SVG_MIME_TYPE};

/// Where the rendered card is going to be consumed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RenderContext {
    /// Self-contained image generation; references must not need the network
    Server,
    /// Browser preview; references may be web paths
    #[default]
    Client,
}

/// Outcome of a logo resolution, with enough detail to assert on
#[derive(Debug)]
pub enum Resolution {
    /// Read from disk, encoded and cached
    Inline { reference: String },
    /// Served from the cache without I/O
    Cached { reference: String },
    /// Client context web path
    PublicPath { reference: String },
    /// Server read failed; the web path is returned instead and nothing is cached
    Fallback { reference: String, error: AssetError },
}

impl Resolution {
    pub fn reference(&self) -> &str {
        match self {
            Self::Inline { reference }
            | Self::Cached { reference }
            | Self::PublicPath { reference }
            | Self::Fallback { reference, .. } => reference,
        }
    }

    pub fn into_reference(self) -> String {
        match self {
            Self::Inline { reference }
            | Self::Cached { reference }
            | Self::PublicPath { reference }
            | Self::Fallback { reference, .. } => reference,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn error(&self) -> Option<&AssetError> {
        match self {
            Self::Fallback { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Maps a logo and render context to an image reference
pub struct LogoResolver {
    storage: LogoAssetStorage,
    source: Arc<dyn AssetSource>,
    cache: Arc<LogoCache>,
}

impl LogoResolver {
    /// Resolver reading from the local filesystem with its own cache
    pub fn new(storage: LogoAssetStorage) -> Self {
        Self::with_source(storage, FsAssetSource)
    }

    pub fn from_config(config: &AssetsConfig) -> Self {
        Self::new(LogoAssetStorage::from_config(config))
    }

    pub fn with_source(storage: LogoAssetStorage, source: impl AssetSource + 'static) -> Self {
        Self {
            storage,
            source: Arc::new(source),
            cache: Arc::new(LogoCache::new()),
        }
    }

    /// Replace the resolver's cache, e.g. with [`LogoCache::shared`]
    pub fn with_cache(mut self, cache: Arc<LogoCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn storage(&self) -> &LogoAssetStorage {
        &self.storage
    }

    pub fn cache(&self) -> &Arc<LogoCache> {
        &self.cache
    }

    /// Resolve a logo to a reference string. Never fails.
    pub fn resolve(&self, id: LogoId, context: RenderContext) -> String {
        self.resolve_detailed(id, context).into_reference()
    }

    pub fn resolve_detailed(&self, id: LogoId, context: RenderContext) -> Resolution {
        match context {
            RenderContext::Client => Resolution::PublicPath {
                reference: self.storage.public_path(id),
            },
            RenderContext::Server => self.resolve_inline(id),
        }
    }

    fn resolve_inline(&self, id: LogoId) -> Resolution {
        if let Some(reference) = self.cache.get(id) {
            debug!("Logo cache hit: {}", id);
            return Resolution::Cached { reference };
        }

        let path = self.storage.asset_path(id);
        match self.source.read_to_string(&path) {
            Ok(svg) => {
                debug!("Logo cache miss, embedding {} ({} bytes)", path.display(), svg.len());
                let reference = self.cache.insert(id, data_uri::encode(SVG_MIME_TYPE, svg));
                Resolution::Inline { reference }
            }
            Err(source) => {
                let error = AssetError::Read { id, path, source };
                warn!("{}", error);
                Resolution::Fallback {
                    reference: self.storage.public_path(id),
                    error,
                }
            }
        }
    }
}
