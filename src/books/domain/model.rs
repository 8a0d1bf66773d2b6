use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::Genre;

// BookEntity is the record stored in the catalog file. Field names are the
// capitalized keys used by existing library files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Genre")]
    pub genre: Genre,
    #[serde(rename = "Read")]
    pub read: bool,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: u32, genre: Genre) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre,
            read: false,
        }
    }

    // title_key is the case-insensitive identity of a book
    pub fn title_key(&self) -> String {
        self.title.to_lowercase()
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.title.to_string()
    }
}

impl Book for BookEntity {
    fn is_read(&self) -> bool {
        self.read
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::library::Genre;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("Dune", "Herbert", 1965, Genre::ScienceFiction);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert_eq!("dune", book.title_key().as_str());
        assert!(!book.is_read());
    }

    #[tokio::test]
    async fn test_should_use_stored_field_names() {
        let book = BookEntity::new("Dune", "Herbert", 1965, Genre::ScienceFiction);
        let val = serde_json::to_value(&book).expect("should serialize");
        assert_eq!("Dune", val["Title"]);
        assert_eq!("Herbert", val["Author"]);
        assert_eq!(1965, val["Year"]);
        assert_eq!("Science Fiction", val["Genre"]);
        assert_eq!(false, val["Read"]);
    }

    #[tokio::test]
    async fn test_should_reject_negative_year_in_record() {
        let json = r#"{"Title": "T", "Author": "A", "Year": -1, "Genre": "Other", "Read": false}"#;
        assert!(serde_json::from_str::<BookEntity>(json).is_err());
    }
}
