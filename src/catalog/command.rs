pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod get_statistics_cmd;
pub mod list_books_cmd;
pub mod mark_read_cmd;
pub mod remove_all_books_cmd;
pub mod remove_book_cmd;
pub mod search_books_cmd;
