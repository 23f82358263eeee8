//! Preview card layouts
//!
//! Each layout declares the fields it accepts ([`Property`]), reads them into
//! a typed config and turns that config into a [`Card`]. Logos go through the
//! shared [`LogoResolver`] so the same layout works for server-generated
//! images and browser previews.

pub mod blog;
pub mod docs;
pub mod fields;
pub mod starter;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::errors::{AppError, AppResult};
use crate::logo_assets::{LogoId, LogoResolver, RenderContext};
use crate::models::{AuthorDirectory, Card, Element, Theme};

pub use blog::BlogLayout;
pub use docs::DocsLayout;
pub use fields::{Fields, parse_assignments};
pub use starter::StarterLayout;

/// How a property is edited
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PropertyKind {
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Select {
        options: Vec<String>,
    },
}

/// A field a layout accepts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    #[serde(flatten)]
    pub kind: PropertyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Property {
    pub fn text(name: &str, default: Option<&str>, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: PropertyKind::Text {
                placeholder: Some(placeholder.to_string()),
            },
            default: default.map(str::to_string),
        }
    }

    pub fn select(name: &str, default: &str, options: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            kind: PropertyKind::Select { options },
            default: Some(default.to_string()),
        }
    }

    pub fn logo(default: LogoId) -> Self {
        Self::select(
            "Logo",
            default.as_ref(),
            LogoId::iter().map(|id| id.to_string()).collect(),
        )
    }
}

/// Everything a layout needs besides its own fields
pub struct RenderEnv<'a> {
    pub logos: &'a LogoResolver,
    pub authors: &'a AuthorDirectory,
    pub context: RenderContext,
}

impl<'a> RenderEnv<'a> {
    pub fn new(
        logos: &'a LogoResolver,
        authors: &'a AuthorDirectory,
        context: RenderContext,
    ) -> Self {
        Self {
            logos,
            authors,
            context,
        }
    }

    /// Logo element placed at the card's top-right corner
    pub fn logo_element(&self, logo: LogoId, size: u32, top: u32, right: u32) -> Element {
        Element::Logo {
            src: self.logos.resolve(logo, self.context),
            alt: logo.alt_text(),
            width: size,
            height: size,
            top,
            right,
        }
    }
}

pub trait Layout: Send + Sync {
    fn name(&self) -> &str;

    fn properties(&self) -> Vec<Property>;

    fn render(&self, fields: &Fields, env: &RenderEnv<'_>) -> AppResult<Card>;

    /// Field values an editor starts from
    fn default_fields(&self) -> Fields {
        self.properties()
            .into_iter()
            .filter_map(|p| p.default.map(|d| (p.name, d)))
            .collect()
    }
}

/// Shared gradient backdrop for the blog and starter cards
pub(crate) fn gradient_background(theme: Theme) -> Vec<String> {
    match theme {
        Theme::Dark => vec![
            "#13111C".to_string(),
            "linear-gradient(327.21deg, rgba(0, 5, 75, 0.35) 3.65%, rgba(20, 0, 136, 0) 40.32%)"
                .to_string(),
            "linear-gradient(147.6deg, rgba(58, 19, 255, 0) 29.79%, rgba(98, 19, 255, 0.1) 85.72%)"
                .to_string(),
        ],
        Theme::Light => vec![
            "#F8F7FC".to_string(),
            "linear-gradient(327.21deg, rgba(113, 99, 255, 0.12) 3.65%, rgba(20, 0, 136, 0) 40.32%)"
                .to_string(),
        ],
    }
}

/// The built-in layouts, looked up by name
pub struct LayoutRegistry {
    layouts: Vec<Box<dyn Layout>>,
}

impl LayoutRegistry {
    pub fn builtin() -> Self {
        Self {
            layouts: vec![
                Box::new(BlogLayout),
                Box::new(DocsLayout::dreamy()),
                Box::new(DocsLayout::dark_ocean()),
                Box::new(DocsLayout::loveable()),
                Box::new(StarterLayout),
            ],
        }
    }

    pub fn get(&self, name: &str) -> AppResult<&dyn Layout> {
        self.layouts
            .iter()
            .find(|layout| layout.name() == name)
            .map(|layout| layout.as_ref())
            .ok_or_else(|| AppError::UnknownLayout {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.layouts.iter().map(|layout| layout.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Layout> {
        self.layouts.iter().map(|layout| layout.as_ref())
    }
}
