//! Centralized error handling for og-preview
//!
//! # Error Categories
//!
//! - **Application Errors**: unknown layouts/logos, invalid layout fields,
//!   configuration and output failures
//! - **Asset Errors**: logo files that could not be read from disk. These are
//!   never returned to callers of the resolver; they travel inside
//!   [`crate::logo_assets::Resolution::Fallback`] as a diagnostic.
//!
//! # Usage
//!
//! ```rust
//! use og_preview::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::UnknownLayout { name: "poster".to_string() })
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
