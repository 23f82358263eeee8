//! Error type definitions for og-preview
//!
//! Application errors surface at the boundaries (CLI arguments, layout fields,
//! configuration files). Asset errors are recovered inside the logo resolver.

use std::path::PathBuf;
use thiserror::Error;

use crate::logo_assets::LogoId;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A logo name outside the known catalog
    #[error("Unknown logo: {name}")]
    UnknownLogo { name: String },

    /// A layout name that is not registered
    #[error("Unknown layout: {name}")]
    UnknownLayout { name: String },

    /// A layout field that is missing or holds an unsupported value
    #[error("Invalid field {field}: {message}")]
    InvalidField { field: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Output serialization failures
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors outside asset resolution
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Logo asset errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The on-disk asset for a known logo could not be read
    #[error("Failed to load logo {id} from {path:?}: {source}")]
    Read {
        id: LogoId,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AssetError {
    /// The logo the failure belongs to
    pub fn logo(&self) -> LogoId {
        match self {
            Self::Read { id, .. } => *id,
        }
    }
}
