use super::fields::{self, Fields};
use super::{Layout, Property, RenderEnv};
use crate::errors::AppResult;
use crate::logo_assets::LogoId;
use crate::models::{Card, Element};

const DEFAULT_URL: &str = "guidenai.com";
const BASE_COLOR: &str = "#13111C";
const URL_COLOR: &str = "hsl(0, 0.00%, 100.00%)";
const SHADOW_LAYER: &str =
    "linear-gradient(327.21deg, rgba(0, 5, 75, 0.35) 3.65%, rgba(20, 0, 136, 0) 40.32%)";
const SHEEN_LAYER: &str =
    "linear-gradient(147.6deg, rgba(58, 19, 255, 0) 29.79%, rgba(98, 19, 255, 0.1) 85.72%)";

#[derive(Debug, Clone, PartialEq)]
pub struct DocsConfig {
    pub page: String,
    pub url: Option<String>,
    pub logo: LogoId,
}

impl DocsConfig {
    pub fn from_fields(fields: &Fields) -> AppResult<Self> {
        Ok(Self {
            page: fields::required(fields, "Page")?,
            url: fields::optional(fields, "Url"),
            logo: fields::logo(fields, LogoId::GuidenaiLight)?,
        })
    }

    /// URL shown in the footer; blank means the platform's own domain
    pub fn display_url(&self) -> &str {
        match self.url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_URL,
        }
    }
}

/// Docs page banner. The variants only differ in their main gradient.
#[derive(Debug, Clone, Copy)]
pub struct DocsLayout {
    name: &'static str,
    gradient: &'static str,
}

impl DocsLayout {
    pub fn dreamy() -> Self {
        Self {
            name: "docs-simple-dreamy",
            gradient: "linear-gradient(245.93deg, #2761EA 0%, #5044DD 36.63%, #7C24CF 100%)",
        }
    }

    pub fn dark_ocean() -> Self {
        Self {
            name: "docs-simple-dark-ocean",
            gradient: "linear-gradient(245.93deg, #0F172A 0%, #1E293B 36.63%, #334155 100%)",
        }
    }

    pub fn loveable() -> Self {
        Self {
            name: "docs-simple-loveable",
            gradient: "linear-gradient(245.93deg, #E9570D 0%, #D73C30 36.63%, #C11C58 100%)",
        }
    }
}

impl Layout for DocsLayout {
    fn name(&self) -> &str {
        self.name
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::text("Page", Some("GuidenAI Documentation"), "Text to display"),
            Property::text("Url", Some(DEFAULT_URL), "Url to display"),
            Property::logo(LogoId::GuidenaiLight),
        ]
    }

    fn render(&self, fields: &Fields, env: &RenderEnv<'_>) -> AppResult<Card> {
        let config = DocsConfig::from_fields(fields)?;

        let mut card = Card::new(self.name, "white");
        card.background = vec![
            BASE_COLOR.to_string(),
            SHADOW_LAYER.to_string(),
            self.gradient.to_string(),
            SHEEN_LAYER.to_string(),
        ];
        card.elements.push(Element::text("page", config.page.clone(), 96).bold());
        let url = Element::text("url", config.display_url(), 20);
        card.elements.push(url.color(URL_COLOR));
        card.elements.push(env.logo_element(config.logo, 96, 106, 97));
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo_assets::{LogoAssetStorage, LogoResolver, RenderContext};
    use crate::models::AuthorDirectory;

    fn render(layout: DocsLayout, pairs: &[(&str, &str)]) -> Card {
        let resolver = LogoResolver::new(LogoAssetStorage::default());
        let authors = AuthorDirectory::default();
        let env = RenderEnv::new(&resolver, &authors, RenderContext::Client);
        let fields: Fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        layout.render(&fields, &env).unwrap()
    }

    #[test]
    fn test_blank_url_shows_default_domain() {
        for url in [None, Some(""), Some("   ")] {
            let mut pairs = vec![("Page", "Getting Started")];
            if let Some(url) = url {
                pairs.push(("Url", url));
            }
            let card = render(DocsLayout::dreamy(), &pairs);
            assert_eq!(card.text("url"), Some("guidenai.com"));
        }
    }

    #[test]
    fn test_custom_url_and_logo() {
        let card = render(
            DocsLayout::loveable(),
            &[("Page", "CLI"), ("Url", "docs.broxi.ai"), ("Logo", "broxi-colored")],
        );
        assert_eq!(card.layout, "docs-simple-loveable");
        assert_eq!(card.text("page"), Some("CLI"));
        assert_eq!(card.text("url"), Some("docs.broxi.ai"));
        assert_eq!(card.logo_src(), Some("/assets/broxi-colored.svg"));
    }

    #[test]
    fn test_variants_differ_only_in_gradient() {
        let dreamy = render(DocsLayout::dreamy(), &[("Page", "X")]);
        let ocean = render(DocsLayout::dark_ocean(), &[("Page", "X")]);

        assert_eq!(dreamy.elements, ocean.elements);
        assert_eq!(dreamy.background[0], ocean.background[0]);
        assert_ne!(dreamy.background[2], ocean.background[2]);
        assert!(ocean.background[2].contains("#0F172A"));
    }

    #[test]
    fn test_default_logo_is_light() {
        let card = render(DocsLayout::dark_ocean(), &[("Page", "X")]);
        assert_eq!(card.logo_src(), Some("/assets/guidenai-light.svg"));
    }
}
