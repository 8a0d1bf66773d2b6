use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::Genre;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub year: u32,
    pub genre: Genre,
    pub read: bool,
}

impl BookDto {
    pub fn new(title: &str, author: &str, year: u32, genre: Genre) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre,
            read: false,
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            genre: other.genre,
            read: other.read,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            genre: other.genre,
            read: other.read,
        }
    }
}
