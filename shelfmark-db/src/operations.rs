//! Insert operations for the three entity tables.
//!
//! Ids are assigned by SQLite (`AUTOINCREMENT`); every insert returns the
//! id the store picked.

use rusqlite::{params, Connection, ErrorCode};
use shelfmark_catalog::{AuthorId, BookId, UserId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(rusqlite::Error),
    #[error("Constraint violation: {0}")]
    Constraint(rusqlite::Error),
    #[error("Failed to open database at {path}: {reason}")]
    Open { path: String, reason: String },
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
            Self::Constraint(e)
        } else {
            Self::Sqlite(e)
        }
    }
}

// ── Author Operations ───────────────────────────────────────────────────────

/// Insert a new author. Returns the generated ID.
pub fn insert_author(conn: &Connection, name: &str) -> Result<AuthorId, StoreError> {
    conn.execute("INSERT INTO authors (name) VALUES (?1)", params![name])?;
    Ok(conn.last_insert_rowid())
}

// ── Book Operations ─────────────────────────────────────────────────────────

/// Insert a new book. Returns the generated ID.
///
/// `author_id` of `None` stores a book with no author yet; `Some(id)` must
/// reference an existing author or the foreign key rejects the row.
pub fn insert_book(
    conn: &Connection,
    name: &str,
    author_id: Option<AuthorId>,
) -> Result<BookId, StoreError> {
    conn.execute(
        "INSERT INTO books (name, author_id) VALUES (?1, ?2)",
        params![name, author_id],
    )?;
    Ok(conn.last_insert_rowid())
}

// ── User Operations ─────────────────────────────────────────────────────────

/// Insert a new user. Returns the generated ID.
pub fn insert_user(conn: &Connection, name: &str) -> Result<UserId, StoreError> {
    conn.execute("INSERT INTO users (name) VALUES (?1)", params![name])?;
    Ok(conn.last_insert_rowid())
}
