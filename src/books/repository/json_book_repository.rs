use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::model::Catalog;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// JsonBookRepository keeps the whole catalog as one JSON array in a text file.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

// Writes into a temp file next to `path` and renames it over `path`. The temp
// file is removed on drop when any step fails.
fn write_atomic(path: &Path, buf: &[u8]) -> LibraryResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(buf)?;
    temp_file.flush()?;
    temp_file.persist(path).map_err(|err| LibraryError::from(err.error))?;
    Ok(())
}

pub(crate) fn encode(catalog: &Catalog) -> LibraryResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    catalog.serialize(&mut ser)?;
    Ok(buf)
}

pub(crate) fn decode(data: &str) -> LibraryResult<Catalog> {
    let books: Vec<BookEntity> = serde_json::from_str(data)?;
    Catalog::from_books(books)
}

#[async_trait]
impl Repository<Catalog> for JsonBookRepository {
    async fn load(&self) -> LibraryResult<Catalog> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no catalog file, starting empty");
                return Ok(Catalog::new());
            }
            Err(err) => return Err(LibraryError::from(err)),
        };
        let catalog = decode(&data).map_err(|err| LibraryError::persistence(
            format!("corrupt catalog file {}: {}", self.path.display(), err).as_str(),
            Some("decode".to_string())))?;
        tracing::info!(path = %self.path.display(), books = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    async fn save(&self, catalog: &Catalog) -> LibraryResult<()> {
        let buf = encode(catalog)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &buf))
            .await
            .map_err(|err| LibraryError::persistence(
                format!("catalog save task failed {}", err).as_str(), Some("join".to_string())))??;
        tracing::debug!(path = %self.path.display(), books = catalog.len(), "saved catalog");
        Ok(())
    }
}

impl BookRepository for JsonBookRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
