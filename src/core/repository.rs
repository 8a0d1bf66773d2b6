use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Repository persists a whole collection at once; there is no partial update path.
#[async_trait]
pub trait Repository<Collection>: Sync + Send {
    // loads the collection, returning an empty one when nothing is stored yet
    async fn load(&self) -> LibraryResult<Collection>;

    // replaces the stored collection
    async fn save(&self, collection: &Collection) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    InMemory,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" => RepositoryStore::InMemory,
            _ => RepositoryStore::JsonFile,
        }
    }
}
