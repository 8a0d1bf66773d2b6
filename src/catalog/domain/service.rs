use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::{Catalog, Statistics};
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

// CatalogServiceImpl owns the in-memory catalog. Every operation holds the
// lock for its whole load-mutate-save cycle, and a mutation only becomes
// visible once it has been saved.
pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    catalog: Mutex<Catalog>,
}

impl CatalogServiceImpl {
    pub async fn load(book_repository: Box<dyn BookRepository>) -> LibraryResult<Self> {
        let catalog = book_repository.load().await?;
        tracing::info!(location = %book_repository.location(), books = catalog.len(), "catalog ready");
        Ok(Self {
            book_repository,
            catalog: Mutex::new(catalog),
        })
    }

    // Applies the mutation to a copy and saves it when `mutate` reports a change.
    async fn commit<T, F>(&self, mutate: F) -> LibraryResult<T>
        where T: Send, F: FnOnce(&mut Catalog) -> LibraryResult<(T, bool)> + Send {
        let mut catalog = self.catalog.lock().await;
        let mut next = catalog.clone();
        let (res, changed) = mutate(&mut next)?;
        if changed {
            self.book_repository.save(&next).await?;
            *catalog = next;
        }
        Ok(res)
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, title: &str, author: &str, year: i64, genre: &str) -> LibraryResult<BookDto> {
        let book = self.commit(|c| c.add(title, author, year, genre).map(|b| (b, true))).await?;
        tracing::info!(title = %book.id(), "added book");
        Ok(BookDto::from(&book))
    }

    async fn remove_book(&self, title: &str) -> LibraryResult<()> {
        let removed = self.commit(|c| {
            let removed = c.remove(title);
            Ok((removed, removed > 0))
        }).await?;
        tracing::info!(title, removed, "removed book");
        Ok(())
    }

    async fn remove_all_books(&self) -> LibraryResult<usize> {
        let removed = self.commit(|c| {
            let removed = c.len();
            c.remove_all();
            Ok((removed, true))
        }).await?;
        tracing::info!(removed, "removed all books");
        Ok(removed)
    }

    async fn mark_read(&self, title: &str) -> LibraryResult<()> {
        let changed = self.commit(|c| c.mark_read(title).map(|changed| (changed, changed))).await?;
        tracing::info!(title, changed, "marked book as read");
        Ok(())
    }

    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto> {
        self.catalog.lock().await.get(title).map(BookDto::from)
    }

    async fn search_books(&self, query: &str) -> Vec<BookDto> {
        self.catalog.lock().await.search(query).into_iter().map(BookDto::from).collect()
    }

    async fn suggest(&self, query: &str) -> Vec<String> {
        self.catalog.lock().await.suggestions(query)
    }

    async fn list_books(&self) -> Vec<BookDto> {
        self.catalog.lock().await.list().iter().map(BookDto::from).collect()
    }

    async fn statistics(&self) -> Statistics {
        self.catalog.lock().await.statistics()
    }
}
