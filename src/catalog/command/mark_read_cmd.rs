use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct MarkReadCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl MarkReadCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MarkReadCommandRequest {
    pub title: String,
}

impl MarkReadCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct MarkReadCommandResponse {
    pub book: BookDto,
}

#[async_trait]
impl Command<MarkReadCommandRequest, MarkReadCommandResponse> for MarkReadCommand {
    async fn execute(&self, req: MarkReadCommandRequest) -> Result<MarkReadCommandResponse, CommandError> {
        self.catalog_service.mark_read(req.title.as_str()).await?;
        let book = self.catalog_service.find_book_by_title(req.title.as_str()).await?;
        Ok(MarkReadCommandResponse { book })
    }
}
