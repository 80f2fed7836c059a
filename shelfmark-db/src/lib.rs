//! SQLite store gateway for the library.
//!
//! Provides schema bootstrap, counts, parameterized inserts, and keyed
//! lookups backed by SQLite (via rusqlite with bundled feature), plus the
//! [`LibraryStore`] trait the higher layers program against.

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{insert_author, insert_book, insert_user, StoreError};
pub use queries::{
    count_rows, find_author_row, find_book_row, get_author_row, get_book_row, library_stats,
    list_author_rows, list_book_ids, list_book_rows_by_author, list_user_rows, LibraryStats,
};
pub use schema::{create_schema, open_database, open_memory};
pub use store::LibraryStore;
