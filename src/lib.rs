//! Personal book catalog: an ordered list of books kept in a JSON file, with
//! add, remove, search, read tracking and statistics, served over HTTP.

pub mod books;
pub mod catalog;
pub mod core;
pub mod utils;
