//! Shared fixtures for the unit tests.

use std::cell::Cell;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rusqlite::Connection;
use shelfmark_catalog::{AuthorId, AuthorRow, BookId, BookRow, Table, UserId, UserRow};
use shelfmark_db::{insert_author, insert_book, insert_user, open_memory, LibraryStore, StoreError};

pub(crate) fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A small library: two authors, three books, two users.
pub(crate) struct Fixture {
    pub conn: Connection,
    pub authors: Vec<AuthorId>,
    pub books: Vec<BookId>,
}

pub(crate) fn small_library() -> Fixture {
    let conn = open_memory().unwrap();
    let herbert = insert_author(&conn, "Frank Herbert").unwrap();
    let jemisin = insert_author(&conn, "N. K. Jemisin").unwrap();
    let books = vec![
        insert_book(&conn, "Dune", Some(herbert)).unwrap(),
        insert_book(&conn, "Children of Dune", Some(herbert)).unwrap(),
        insert_book(&conn, "The Fifth Season", Some(jemisin)).unwrap(),
    ];
    insert_user(&conn, "Reader One").unwrap();
    insert_user(&conn, "Reader Two").unwrap();
    Fixture {
        conn,
        authors: vec![herbert, jemisin],
        books,
    }
}

/// Turn off foreign keys so tests can plant dangling references.
pub(crate) fn disable_foreign_keys(conn: &Connection) {
    conn.execute_batch("PRAGMA foreign_keys=OFF;").unwrap();
}

/// Delegates to a real connection but rejects inserts once `budget` runs out.
pub(crate) struct FlakyStore {
    pub conn: Connection,
    budget: Cell<usize>,
}

impl FlakyStore {
    pub(crate) fn new(conn: Connection, budget: usize) -> Self {
        Self {
            conn,
            budget: Cell::new(budget),
        }
    }

    fn spend(&self) -> Result<(), StoreError> {
        match self.budget.get() {
            0 => Err(StoreError::Sqlite(rusqlite::Error::ExecuteReturnedResults)),
            n => {
                self.budget.set(n - 1);
                Ok(())
            }
        }
    }
}

impl LibraryStore for FlakyStore {
    fn count(&self, table: Table) -> Result<i64, StoreError> {
        self.conn.count(table)
    }

    fn author_rows(&self) -> Result<Vec<AuthorRow>, StoreError> {
        self.conn.author_rows()
    }

    fn find_author(&self, id: AuthorId) -> Result<Option<AuthorRow>, StoreError> {
        self.conn.find_author(id)
    }

    fn book_rows_by_author(&self, author_id: AuthorId) -> Result<Vec<BookRow>, StoreError> {
        self.conn.book_rows_by_author(author_id)
    }

    fn find_book(&self, id: BookId) -> Result<Option<BookRow>, StoreError> {
        self.conn.find_book(id)
    }

    fn book_ids(&self) -> Result<Vec<BookId>, StoreError> {
        self.conn.book_ids()
    }

    fn user_rows(&self) -> Result<Vec<UserRow>, StoreError> {
        self.conn.user_rows()
    }

    fn insert_author(&self, name: &str) -> Result<AuthorId, StoreError> {
        self.spend()?;
        self.conn.insert_author(name)
    }

    fn insert_book(&self, name: &str, author_id: Option<AuthorId>) -> Result<BookId, StoreError> {
        self.spend()?;
        self.conn.insert_book(name, author_id)
    }

    fn insert_user(&self, name: &str) -> Result<UserId, StoreError> {
        self.spend()?;
        self.conn.insert_user(name)
    }
}
