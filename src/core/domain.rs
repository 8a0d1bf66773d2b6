use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_DATA_FILE: &str = "library.txt";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

// Configuration abstracts config options for the bookshelf service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub bind_addr: String,
    pub store: RepositoryStore,
}

impl Configuration {
    pub fn new(data_file: &str) -> Self {
        Configuration {
            data_file: PathBuf::from(data_file),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            store: RepositoryStore::JsonFile,
        }
    }

    // from_env overrides the defaults with BOOKSHELF_DATA_FILE, BOOKSHELF_ADDR
    // and BOOKSHELF_STORE when they are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new(DEFAULT_DATA_FILE);
        if let Some(data_file) = lookup("BOOKSHELF_DATA_FILE") {
            config.data_file = PathBuf::from(data_file);
        }
        if let Some(addr) = lookup("BOOKSHELF_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(store) = lookup("BOOKSHELF_STORE") {
            config.store = RepositoryStore::from(store);
        }
        config
    }
}
