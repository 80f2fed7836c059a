//! Read queries for the library database.
//!
//! Everything here returns flat rows. Nesting is the library crate's job.

use rusqlite::{params, Connection};
use shelfmark_catalog::*;

use crate::operations::StoreError;

// ── Counts ──────────────────────────────────────────────────────────────────

/// Count the rows of one entity table.
pub fn count_rows(conn: &Connection, table: Table) -> Result<i64, StoreError> {
    // Table names can't be bound as parameters; they come from a closed enum.
    let sql = match table {
        Table::Authors => "SELECT COUNT(*) FROM authors",
        Table::Books => "SELECT COUNT(*) FROM books",
        Table::Users => "SELECT COUNT(*) FROM users",
    };
    let count: i64 = conn.query_row(sql, [], |r| r.get(0))?;
    Ok(count)
}

/// Row counts for all three tables.
pub fn library_stats(conn: &Connection) -> Result<LibraryStats, StoreError> {
    Ok(LibraryStats {
        authors: count_rows(conn, Table::Authors)?,
        books: count_rows(conn, Table::Books)?,
        users: count_rows(conn, Table::Users)?,
    })
}

/// Summary statistics for the library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub authors: i64,
    pub books: i64,
    pub users: i64,
}

impl LibraryStats {
    pub fn get(&self, table: Table) -> i64 {
        match table {
            Table::Authors => self.authors,
            Table::Books => self.books,
            Table::Users => self.users,
        }
    }
}

// ── Author Lookups ──────────────────────────────────────────────────────────

/// List all authors in id order.
pub fn list_author_rows(conn: &Connection) -> Result<Vec<AuthorRow>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM authors ORDER BY id")?;
    let rows = stmt.query_map([], row_to_author)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find an author by id.
pub fn find_author_row(conn: &Connection, id: AuthorId) -> Result<Option<AuthorRow>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM authors WHERE id = ?1")?;
    let result = stmt.query_row(params![id], row_to_author);
    match result {
        Ok(a) => Ok(Some(a)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Fetch an author that is expected to exist.
pub fn get_author_row(conn: &Connection, id: AuthorId) -> Result<AuthorRow, StoreError> {
    find_author_row(conn, id)?.ok_or_else(|| StoreError::not_found("author", id))
}

// ── Book Lookups ────────────────────────────────────────────────────────────

/// List the books written by one author.
pub fn list_book_rows_by_author(
    conn: &Connection,
    author_id: AuthorId,
) -> Result<Vec<BookRow>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT id, name, author_id FROM books WHERE author_id = ?1 ORDER BY id")?;
    let rows = stmt.query_map(params![author_id], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a book by id.
pub fn find_book_row(conn: &Connection, id: BookId) -> Result<Option<BookRow>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name, author_id FROM books WHERE id = ?1")?;
    let result = stmt.query_row(params![id], row_to_book);
    match result {
        Ok(b) => Ok(Some(b)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Fetch a book that is expected to exist.
pub fn get_book_row(conn: &Connection, id: BookId) -> Result<BookRow, StoreError> {
    find_book_row(conn, id)?.ok_or_else(|| StoreError::not_found("book", id))
}

/// All book ids in id order.
pub fn list_book_ids(conn: &Connection) -> Result<Vec<BookId>, StoreError> {
    let mut stmt = conn.prepare("SELECT id FROM books ORDER BY id")?;
    let rows = stmt.query_map([], |row| row.get::<_, BookId>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── User Lookups ────────────────────────────────────────────────────────────

/// List all users in id order.
pub fn list_user_rows(conn: &Connection) -> Result<Vec<UserRow>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM users ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(UserRow {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_author(row: &rusqlite::Row<'_>) -> rusqlite::Result<AuthorRow> {
    Ok(AuthorRow {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookRow> {
    Ok(BookRow {
        id: row.get(0)?,
        name: row.get(1)?,
        author_id: row.get(2)?,
    })
}
