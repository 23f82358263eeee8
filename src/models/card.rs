//! Rendered card description
//!
//! A card is the styled, serializable description of one preview image. It
//! carries resolved values only; rasterizing it is left to the consumer.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::config::defaults::{CARD_HEIGHT, CARD_WIDTH};

/// Colour scheme of a card
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn text_color(self) -> &'static str {
        match self {
            Self::Light => "black",
            Self::Dark => "white",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Text {
        role: String,
        content: String,
        font_size: u32,
        bold: bool,
        opacity: f32,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    Image {
        role: String,
        src: String,
        alt: String,
        width: u32,
        height: u32,
        rounded: bool,
    },
    Logo {
        src: String,
        alt: String,
        width: u32,
        height: u32,
        top: u32,
        right: u32,
    },
}

impl Element {
    pub fn text(role: &str, content: impl Into<String>, font_size: u32) -> Self {
        Self::Text {
            role: role.to_string(),
            content: content.into(),
            font_size,
            bold: false,
            opacity: 1.0,
            color: None,
        }
    }

    pub fn bold(mut self) -> Self {
        if let Self::Text { bold, .. } = &mut self {
            *bold = true;
        }
        self
    }

    pub fn opacity(mut self, value: f32) -> Self {
        if let Self::Text { opacity, .. } = &mut self {
            *opacity = value;
        }
        self
    }

    pub fn color(mut self, value: impl Into<String>) -> Self {
        if let Self::Text { color, .. } = &mut self {
            *color = Some(value.into());
        }
        self
    }

    pub fn role(&self) -> &str {
        match self {
            Self::Text { role, .. } | Self::Image { role, .. } => role,
            Self::Logo { .. } => "logo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub layout: String,
    pub width: u32,
    pub height: u32,
    pub text_color: String,
    /// Background layers, bottom first
    pub background: Vec<String>,
    pub elements: Vec<Element>,
}

impl Card {
    pub fn new(layout: &str, text_color: &str) -> Self {
        Self {
            layout: layout.to_string(),
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            text_color: text_color.to_string(),
            background: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn element(&self, role: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.role() == role)
    }

    /// Text content of the first text element with the given role
    pub fn text(&self, role: &str) -> Option<&str> {
        match self.element(role)? {
            Element::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn logo_src(&self) -> Option<&str> {
        match self.element("logo")? {
            Element::Logo { src, .. } => Some(src),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_builder() {
        let element = Element::text("name", "Remix", 72).bold().color("#C049FF");
        assert_eq!(
            element,
            Element::Text {
                role: "name".to_string(),
                content: "Remix".to_string(),
                font_size: 72,
                bold: true,
                opacity: 1.0,
                color: Some("#C049FF".to_string()),
            }
        );
        assert_eq!(element.role(), "name");
    }

    #[test]
    fn test_text_setters_ignore_other_elements() {
        let logo = Element::Logo {
            src: "/assets/broxi-dark.svg".to_string(),
            alt: "Broxi Dark".to_string(),
            width: 96,
            height: 96,
            top: 106,
            right: 97,
        };
        assert_eq!(logo.clone().bold().opacity(0.5).color("red"), logo);
    }
}
