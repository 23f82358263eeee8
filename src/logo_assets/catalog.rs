//! The closed set of logos a card can carry

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::errors::{AppError, AppResult};

/// Product a logo belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    #[strum(serialize = "GuidenAI")]
    Guidenai,
    #[strum(serialize = "Broxi")]
    Broxi,
}

/// Visual treatment of a logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Dark,
    Light,
    Colored,
}

/// Logo identifier, one per brand and variant pair
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum LogoId {
    GuidenaiDark,
    GuidenaiLight,
    GuidenaiColored,
    BroxiDark,
    BroxiLight,
    BroxiColored,
}

impl LogoId {
    /// Parse a logo name, failing with [`AppError::UnknownLogo`]
    pub fn parse(name: &str) -> AppResult<Self> {
        name.parse().map_err(|_| AppError::UnknownLogo {
            name: name.to_string(),
        })
    }

    pub fn brand(self) -> Brand {
        match self {
            Self::GuidenaiDark | Self::GuidenaiLight | Self::GuidenaiColored => Brand::Guidenai,
            Self::BroxiDark | Self::BroxiLight | Self::BroxiColored => Brand::Broxi,
        }
    }

    pub fn variant(self) -> Variant {
        match self {
            Self::GuidenaiDark | Self::BroxiDark => Variant::Dark,
            Self::GuidenaiLight | Self::BroxiLight => Variant::Light,
            Self::GuidenaiColored | Self::BroxiColored => Variant::Colored,
        }
    }

    /// Human-readable label, e.g. "GuidenAI Dark"
    pub fn label(self) -> String {
        format!("{} {}", self.brand(), self.variant())
    }

    /// Asset file name shared by the disk and web layouts
    pub fn file_name(self) -> String {
        format!("{}.svg", self.as_ref())
    }

    /// Alt text used when the logo is placed on a card
    pub fn alt_text(self) -> String {
        format!("{} logo", self.as_ref())
    }
}

/// A selectable logo with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoOption {
    pub value: LogoId,
    pub label: String,
}

/// All logos in catalog order, paired with their labels
pub fn logo_options() -> Vec<LogoOption> {
    LogoId::iter()
        .map(|value| LogoOption {
            value,
            label: value.label(),
        })
        .collect()
}
