pub mod author;
pub mod card;

pub use author::{Author, AuthorDirectory};
pub use card::{Card, Element, Theme};
