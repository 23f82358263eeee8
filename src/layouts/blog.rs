use super::fields::{self, Fields};
use super::{Layout, Property, RenderEnv, gradient_background};
use crate::errors::AppResult;
use crate::logo_assets::LogoId;
use crate::models::{AuthorDirectory, Card, Element, Theme};

/// Titles longer than this (in UTF-16 code units) get the smaller font
const LONG_TITLE_UNITS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct BlogConfig {
    pub title: String,
    pub author: String,
    pub theme: Theme,
    pub logo: LogoId,
}

impl BlogConfig {
    pub fn from_fields(fields: &Fields) -> AppResult<Self> {
        Ok(Self {
            title: fields::required(fields, "Title")?,
            author: fields::required(fields, "Author")?,
            theme: fields::theme(fields)?,
            logo: fields::logo(fields, LogoId::GuidenaiDark)?,
        })
    }

    fn title_font_size(&self) -> u32 {
        if self.title.encode_utf16().count() > LONG_TITLE_UNITS {
            48
        } else {
            60
        }
    }
}

/// Blog post card: title, author avatar and name over a themed gradient
#[derive(Debug, Clone, Copy, Default)]
pub struct BlogLayout;

impl Layout for BlogLayout {
    fn name(&self) -> &str {
        "blog"
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::text(
                "Title",
                Some("Why you should use Config as Code"),
                "Blog post title",
            ),
            Property::select("Author", "Jake Runzer", AuthorDirectory::names()),
            Property::select(
                "Theme",
                "dark",
                vec!["light".to_string(), "dark".to_string()],
            ),
            Property::logo(LogoId::GuidenaiDark),
        ]
    }

    fn render(&self, fields: &Fields, env: &RenderEnv<'_>) -> AppResult<Card> {
        let config = BlogConfig::from_fields(fields)?;
        let author = env.authors.get(&config.author);

        let mut card = Card::new(self.name(), config.theme.text_color());
        card.background = gradient_background(config.theme);
        let title_size = config.title_font_size();
        card.elements.push(Element::text("title", config.title, title_size).bold());
        card.elements.push(Element::Image {
            role: "avatar".to_string(),
            src: author.image,
            alt: author.name,
            width: 56,
            height: 56,
            rounded: true,
        });
        card.elements.push(Element::text("author", config.author, 30).opacity(0.6));
        card.elements.push(env.logo_element(config.logo, 96, 106, 97));
        Ok(card)
    }
}
