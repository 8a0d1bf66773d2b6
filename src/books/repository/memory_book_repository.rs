use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::books::repository::BookRepository;
use crate::catalog::domain::model::Catalog;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the saved catalog in process memory.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    stored: Mutex<Catalog>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // number of successful saves so far
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    // makes every following save fail with a persistence error
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Repository<Catalog> for MemoryBookRepository {
    async fn load(&self) -> LibraryResult<Catalog> {
        Ok(self.stored.lock().await.clone())
    }

    async fn save(&self, catalog: &Catalog) -> LibraryResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(LibraryError::persistence("memory store rejected save", Some("injected".to_string())));
        }
        *self.stored.lock().await = catalog.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl BookRepository for MemoryBookRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::domain::model::Catalog;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_round_trip_catalog() {
        let repo = MemoryBookRepository::new();
        assert!(repo.load().await.expect("should load").is_empty());

        let mut catalog = Catalog::new();
        catalog.add("Dune", "Herbert", 1965, "Science Fiction").expect("should add");
        repo.save(&catalog).await.expect("should save");
        assert_eq!(catalog, repo.load().await.expect("should load"));
        assert_eq!(1, repo.saves());
    }

    #[tokio::test]
    async fn test_should_fail_saves_on_demand() {
        let repo = MemoryBookRepository::new();
        repo.fail_saves(true);
        assert!(matches!(repo.save(&Catalog::new()).await, Err(LibraryError::Persistence { .. })));
        assert_eq!(0, repo.saves());
    }
}
