use serde::{Deserialize, Serialize};

use crate::config::defaults::DEFAULT_AUTHOR_AVATAR;

const AUTHORS: &[(&str, &str)] = &[
    ("Faraz Patankar", "https://og.railway.app/authors/faraz-patankar.jpeg"),
    ("Jake Cooper", "https://og.railway.app/authors/jake-cooper.jpeg"),
    ("Greg Schier", "https://og.railway.app/authors/greg-schier.jpeg"),
    ("Jake Runzer", "https://og.railway.app/authors/jake-runzer.jpeg"),
    ("Angelo Saraceno", "https://og.railway.app/authors/angelo-saraceno.jpeg"),
    ("wyzlle", "https://og.railway.app/authors/wyzlle.png"),
    ("David Banys", "https://og.railway.app/authors/david-banys.png"),
    ("Sarah Bedell", "https://og.railway.app/authors/sarah-bedell.jpg"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub image: String,
}

impl Author {
    fn known(name: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
        }
    }
}

/// Known blog authors and their avatars
#[derive(Debug, Clone)]
pub struct AuthorDirectory {
    default_avatar: String,
}

impl AuthorDirectory {
    pub fn new(default_avatar: impl Into<String>) -> Self {
        Self {
            default_avatar: default_avatar.into(),
        }
    }

    pub fn authors() -> impl Iterator<Item = Author> {
        AUTHORS.iter().map(|(name, image)| Author::known(name, image))
    }

    pub fn names() -> Vec<String> {
        AUTHORS.iter().map(|(name, _)| name.to_string()).collect()
    }

    pub fn default_author() -> Author {
        let (name, image) = AUTHORS[0];
        Author::known(name, image)
    }

    /// Exact-name lookup. Names not in the directory get the default avatar.
    pub fn get(&self, name: &str) -> Author {
        AUTHORS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(known, image)| Author::known(known, image))
            .unwrap_or_else(|| Author {
                name: name.to_string(),
                image: self.default_avatar.clone(),
            })
    }
}

impl Default for AuthorDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHOR_AVATAR)
    }
}
