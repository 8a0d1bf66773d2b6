pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::model::Statistics;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, title: &str, author: &str, year: i64, genre: &str) -> LibraryResult<BookDto>;
    async fn remove_book(&self, title: &str) -> LibraryResult<()>;
    async fn remove_all_books(&self) -> LibraryResult<usize>;
    async fn mark_read(&self, title: &str) -> LibraryResult<()>;
    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto>;
    async fn search_books(&self, query: &str) -> Vec<BookDto>;
    async fn suggest(&self, query: &str) -> Vec<String>;
    async fn list_books(&self) -> Vec<BookDto>;
    async fn statistics(&self) -> Statistics;
}
