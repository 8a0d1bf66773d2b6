use std::collections::HashSet;
use serde::Serialize;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::library::{Genre, LibraryError, LibraryResult};

// Catalog is the ordered collection of books owned by the catalog service.
// Insertion order is display order. Titles are unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<BookEntity>,
}

// Statistics summarises read progress over the whole catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub read_count: usize,
    // 0.0 for an empty catalog
    pub read_fraction: f64,
}

impl Statistics {
    pub fn read_percentage(&self) -> f64 {
        self.read_fraction * 100.0
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from stored records, checking every record and the
    /// uniqueness of titles.
    pub fn from_books(books: Vec<BookEntity>) -> LibraryResult<Self> {
        let mut seen = HashSet::new();
        for book in &books {
            validate_text("title", &book.title)?;
            validate_text("author", &book.author)?;
            if !seen.insert(book.title_key()) {
                return Err(LibraryError::duplicate_title(
                    format!("a book titled {:?} already exists", book.title).as_str()));
            }
        }
        Ok(Self { books })
    }

    /// Appends a new unread book after validating the input and checking that
    /// no book with the same title (ignoring case) exists. Title and author
    /// are stored trimmed.
    pub fn add(&mut self, title: &str, author: &str, year: i64, genre: &str) -> LibraryResult<BookEntity> {
        let title = title.trim();
        let author = author.trim();
        validate_text("title", title)?;
        validate_text("author", author)?;
        let year = validate_year(year)?;
        let genre: Genre = genre.parse()?;

        let key = title.to_lowercase();
        if self.books.iter().any(|b| b.title_key() == key) {
            return Err(LibraryError::duplicate_title(
                format!("a book titled {:?} already exists", title).as_str()));
        }

        let book = BookEntity::new(title, author, year, genre);
        self.books.push(book.clone());
        Ok(book)
    }

    /// Removes the book whose stored title matches exactly. Returns the number
    /// of removed books; an unknown title removes nothing.
    pub fn remove(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|b| b.title != title);
        before - self.books.len()
    }

    pub fn remove_all(&mut self) {
        self.books.clear();
    }

    /// Marks the book with exactly this title as read. Returns whether the
    /// flag changed.
    pub fn mark_read(&mut self, title: &str) -> LibraryResult<bool> {
        let book = self.books.iter_mut()
            .find(|b| b.title == title)
            .ok_or_else(|| LibraryError::not_found(format!("no book titled {:?}", title).as_str()))?;
        if book.read {
            return Ok(false);
        }
        book.read = true;
        Ok(true)
    }

    pub fn get(&self, title: &str) -> LibraryResult<&BookEntity> {
        self.books.iter()
            .find(|b| b.title == title)
            .ok_or_else(|| LibraryError::not_found(format!("no book titled {:?}", title).as_str()))
    }

    /// Books whose title or author contains the query, ignoring case, in
    /// catalog order. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&BookEntity> {
        if query.is_empty() {
            return vec![];
        }
        let needle = query.to_lowercase();
        self.books.iter()
            .filter(|b| contains(&b.title, &needle) || contains(&b.author, &needle))
            .collect()
    }

    /// Distinct matching titles followed by distinct matching authors.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return vec![];
        }
        let needle = query.to_lowercase();
        let mut titles: Vec<String> = vec![];
        let mut authors: Vec<String> = vec![];
        for book in &self.books {
            if contains(&book.title, &needle) && !titles.contains(&book.title) {
                titles.push(book.title.to_string());
            }
            if contains(&book.author, &needle) && !authors.contains(&book.author) {
                authors.push(book.author.to_string());
            }
        }
        titles.extend(authors);
        titles
    }

    pub fn list(&self) -> &[BookEntity] {
        &self.books
    }

    pub fn statistics(&self) -> Statistics {
        let total = self.books.len();
        let read_count = self.books.iter().filter(|b| b.is_read()).count();
        let read_fraction = if total == 0 { 0.0 } else { read_count as f64 / total as f64 };
        Statistics { total, read_count, read_fraction }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

fn validate_text(field: &str, value: &str) -> LibraryResult<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::validation(
            format!("{} must not be empty", field).as_str(), Some(field.to_string())));
    }
    Ok(())
}

// Year 0 is accepted as an unknown year.
fn validate_year(year: i64) -> LibraryResult<u32> {
    u32::try_from(year).map_err(|_| LibraryError::validation(
        format!("year {} must be between 0 and {}", year, u32::MAX).as_str(), Some("year".to_string())))
}
