use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use super::fields::{self, Fields};
use super::{Layout, Property, RenderEnv, gradient_background};
use crate::errors::AppResult;
use crate::logo_assets::LogoId;
use crate::models::{Card, Element, Theme};

const DEVICONS_URL: &str = "https://devicons.railway.app";
const HIGHLIGHT_COLOR: &str = "#C049FF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
pub enum IconVisibility {
    #[default]
    Show,
    Hide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
pub enum Platform {
    #[default]
    GuidenAI,
    BroxiAI,
}

fn option_names<T: IntoEnumIterator + ToString>() -> Vec<String> {
    T::iter().map(|v| v.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarterConfig {
    pub name: String,
    pub url: Option<String>,
    pub icon_url: String,
    pub icon: IconVisibility,
    pub platform: Platform,
    pub logo: LogoId,
}

impl StarterConfig {
    pub fn from_fields(fields: &Fields) -> AppResult<Self> {
        Ok(Self {
            name: fields::text_or(fields, "Name", ""),
            url: fields::optional(fields, "URL"),
            icon_url: fields::text_or(fields, "IconURL", ""),
            icon: fields::choice(
                fields,
                "Icon",
                IconVisibility::default(),
                &option_names::<IconVisibility>(),
            )?,
            platform: fields::choice(
                fields,
                "Platform",
                Platform::default(),
                &option_names::<Platform>(),
            )?,
            logo: fields::logo(fields, LogoId::GuidenaiLight)?,
        })
    }

    /// Explicit icon URL, or a devicon looked up by starter name
    pub fn resolved_icon_url(&self) -> String {
        if !self.icon_url.is_empty() {
            return self.icon_url.clone();
        }
        let name = if self.name.is_empty() {
            "GuidenAI"
        } else {
            self.name.as_str()
        };
        format!("{}/{}?variant=light", DEVICONS_URL, urlencoding::encode(name))
    }
}

/// "Deploy <starter> on <platform>" card
#[derive(Debug, Clone, Copy, Default)]
pub struct StarterLayout;

impl Layout for StarterLayout {
    fn name(&self) -> &str {
        "starter"
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::text("Name", Some("BlitzJS"), "Starter title"),
            Property::text("URL", None, "github.com/railwayapp/starters"),
            Property::text("IconURL", Some(""), "Custom icon URL (optional)"),
            Property::select("Icon", "Show", option_names::<IconVisibility>()),
            Property::select("Platform", "GuidenAI", option_names::<Platform>()),
            Property::logo(LogoId::GuidenaiLight),
        ]
    }

    fn render(&self, fields: &Fields, env: &RenderEnv<'_>) -> AppResult<Card> {
        let config = StarterConfig::from_fields(fields)?;

        let mut card = Card::new(self.name(), Theme::Dark.text_color());
        card.background = gradient_background(Theme::Dark);

        if config.icon == IconVisibility::Show {
            card.elements.push(Element::Image {
                role: "icon".to_string(),
                src: config.resolved_icon_url(),
                alt: config.name.clone(),
                width: 108,
                height: 108,
                rounded: false,
            });
        }

        card.elements.push(Element::text("deploy", "Deploy", 72).bold());
        let name = Element::text("name", config.name.clone(), 72);
        card.elements.push(name.bold().color(HIGHLIGHT_COLOR));
        let platform = format!("on {}", config.platform);
        card.elements.push(Element::text("platform", platform, 72).bold());

        if let Some(url) = config.url.as_deref().filter(|url| !url.is_empty()) {
            card.elements.push(Element::text("url", url, 18).opacity(0.4));
        }

        card.elements.push(env.logo_element(config.logo, 60, 66, 96));
        Ok(card)
    }
}
