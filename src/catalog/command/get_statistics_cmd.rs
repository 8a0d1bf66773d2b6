use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::Statistics;
use crate::core::command::{Command, CommandError};

pub struct GetStatisticsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetStatisticsCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetStatisticsCommandResponse {
    #[serde(flatten)]
    pub statistics: Statistics,
    // read share formatted with two decimals, e.g. "66.67"
    pub read_percentage: String,
}

impl GetStatisticsCommandResponse {
    pub fn new(statistics: Statistics) -> Self {
        Self {
            read_percentage: format!("{:.2}", statistics.read_percentage()),
            statistics,
        }
    }
}

#[async_trait]
impl Command<(), GetStatisticsCommandResponse> for GetStatisticsCommand {
    async fn execute(&self, _req: ()) -> Result<GetStatisticsCommandResponse, CommandError> {
        Ok(GetStatisticsCommandResponse::new(self.catalog_service.statistics().await))
    }
}
