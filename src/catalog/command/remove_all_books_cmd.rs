use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveAllBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveAllBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveAllBooksCommandResponse {
    pub removed: usize,
}

#[async_trait]
impl Command<(), RemoveAllBooksCommandResponse> for RemoveAllBooksCommand {
    async fn execute(&self, _req: ()) -> Result<RemoveAllBooksCommandResponse, CommandError> {
        self.catalog_service.remove_all_books().await
            .map_err(CommandError::from).map(|removed| RemoveAllBooksCommandResponse { removed })
    }
}
