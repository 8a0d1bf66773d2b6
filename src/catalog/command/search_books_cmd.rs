use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchBooksCommandRequest {
    #[serde(default)]
    pub q: String,
}

impl SearchBooksCommandRequest {
    pub fn new(q: &str) -> Self {
        Self {
            q: q.to_string(),
        }
    }
}

// An empty query means no search is active; both lists are then empty.
#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub suggestions: Vec<String>,
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = self.catalog_service.search_books(req.q.as_str()).await;
        let suggestions = self.catalog_service.suggest(req.q.as_str()).await;
        Ok(SearchBooksCommandResponse { books, suggestions })
    }
}
