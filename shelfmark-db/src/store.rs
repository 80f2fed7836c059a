//! The data-access capability the library layer is written against.
//!
//! `shelfmark-lib` never sees a `rusqlite::Connection` directly; it takes any
//! `LibraryStore`. The SQLite implementation below just forwards to the free
//! functions in [`crate::operations`] and [`crate::queries`].

use rusqlite::Connection;
use shelfmark_catalog::*;

use crate::operations::{self, StoreError};
use crate::queries::{self, LibraryStats};

/// Synchronous query/exec interface over the relational store.
pub trait LibraryStore {
    fn count(&self, table: Table) -> Result<i64, StoreError>;

    fn stats(&self) -> Result<LibraryStats, StoreError> {
        Ok(LibraryStats {
            authors: self.count(Table::Authors)?,
            books: self.count(Table::Books)?,
            users: self.count(Table::Users)?,
        })
    }

    fn author_rows(&self) -> Result<Vec<AuthorRow>, StoreError>;
    fn find_author(&self, id: AuthorId) -> Result<Option<AuthorRow>, StoreError>;

    fn author(&self, id: AuthorId) -> Result<AuthorRow, StoreError> {
        self.find_author(id)?
            .ok_or(StoreError::NotFound { entity: "author", id })
    }

    fn book_rows_by_author(&self, author_id: AuthorId) -> Result<Vec<BookRow>, StoreError>;
    fn find_book(&self, id: BookId) -> Result<Option<BookRow>, StoreError>;

    fn book(&self, id: BookId) -> Result<BookRow, StoreError> {
        self.find_book(id)?
            .ok_or(StoreError::NotFound { entity: "book", id })
    }

    fn book_ids(&self) -> Result<Vec<BookId>, StoreError>;
    fn user_rows(&self) -> Result<Vec<UserRow>, StoreError>;

    fn insert_author(&self, name: &str) -> Result<AuthorId, StoreError>;
    fn insert_book(&self, name: &str, author_id: Option<AuthorId>) -> Result<BookId, StoreError>;
    fn insert_user(&self, name: &str) -> Result<UserId, StoreError>;
}

impl LibraryStore for Connection {
    fn count(&self, table: Table) -> Result<i64, StoreError> {
        queries::count_rows(self, table)
    }

    fn stats(&self) -> Result<LibraryStats, StoreError> {
        queries::library_stats(self)
    }

    fn author_rows(&self) -> Result<Vec<AuthorRow>, StoreError> {
        queries::list_author_rows(self)
    }

    fn find_author(&self, id: AuthorId) -> Result<Option<AuthorRow>, StoreError> {
        queries::find_author_row(self, id)
    }

    fn author(&self, id: AuthorId) -> Result<AuthorRow, StoreError> {
        queries::get_author_row(self, id)
    }

    fn book_rows_by_author(&self, author_id: AuthorId) -> Result<Vec<BookRow>, StoreError> {
        queries::list_book_rows_by_author(self, author_id)
    }

    fn find_book(&self, id: BookId) -> Result<Option<BookRow>, StoreError> {
        queries::find_book_row(self, id)
    }

    fn book(&self, id: BookId) -> Result<BookRow, StoreError> {
        queries::get_book_row(self, id)
    }

    fn book_ids(&self) -> Result<Vec<BookId>, StoreError> {
        queries::list_book_ids(self)
    }

    fn user_rows(&self) -> Result<Vec<UserRow>, StoreError> {
        queries::list_user_rows(self)
    }

    fn insert_author(&self, name: &str) -> Result<AuthorId, StoreError> {
        operations::insert_author(self, name)
    }

    fn insert_book(&self, name: &str, author_id: Option<AuthorId>) -> Result<BookId, StoreError> {
        operations::insert_book(self, name, author_id)
    }

    fn insert_user(&self, name: &str) -> Result<UserId, StoreError> {
        operations::insert_user(self, name)
    }
}
