/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Config file
pub const DEFAULT_CONFIG_FILE: &str = "og-preview.toml";

// Asset defaults
pub const DEFAULT_ASSET_DIR: &str = "public/assets";
pub const DEFAULT_PUBLIC_PREFIX: &str = "/assets";

// Author defaults
pub const DEFAULT_AUTHOR_AVATAR: &str = "https://og.railway.app/authors/default-avatar.png";

// Card geometry
pub const CARD_WIDTH: u32 = 1200;
pub const CARD_HEIGHT: u32 = 630;
