pub mod json_book_repository;
pub mod memory_book_repository;

use crate::catalog::domain::model::Catalog;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<Catalog> {
    // describes where the catalog lives, for logging
    fn location(&self) -> String;
}
