//! Logo catalog, storage mappings and server/client aware resolution

pub mod cache;
pub mod catalog;
pub mod resolver;
pub mod storage;

pub use cache::LogoCache;
pub use catalog::{Brand, LogoId, LogoOption, Variant, logo_options};
pub use resolver::{LogoResolver, RenderContext, Resolution};
pub use storage::{AssetSource, FsAssetSource, LogoAssetStorage};
