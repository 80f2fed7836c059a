//! Data model types for the library.
//!
//! Two layers live here: the flat rows exactly as stored (`AuthorRow`,
//! `BookRow`, `UserRow`) and the nested views rebuilt from them (`Author`,
//! `Book`, `User`). Views are recomputed on every read; nothing in them is
//! written back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned author identity.
pub type AuthorId = i64;
/// Store-assigned book identity.
pub type BookId = i64;
/// Store-assigned user identity.
pub type UserId = i64;

/// Id carried by the unassigned-author sentinel. The store never hands it out.
pub const UNASSIGNED_AUTHOR_ID: AuthorId = 0;

// ── Tables ──────────────────────────────────────────────────────────────────

/// The three entity tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Authors,
    Books,
    Users,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Users, Table::Books, Table::Authors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Authors => "authors",
            Table::Books => "books",
            Table::Users => "users",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Rows ────────────────────────────────────────────────────────────────────

/// An `authors` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRow {
    pub id: AuthorId,
    pub name: String,
}

/// A `books` row. `author_id` is `None` for books minted while no author existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub id: BookId,
    pub name: String,
    pub author_id: Option<AuthorId>,
}

/// A `users` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
}

// ── Author ──────────────────────────────────────────────────────────────────

/// An author together with the books they wrote.
///
/// `books` is derived from the `books.author_id` foreign key on each read.
/// How deep it is expanded depends on the read path; see
/// `shelfmark_lib::reconstruct`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Author {
    /// The placeholder author used when no author exists yet.
    ///
    /// Callers must check [`Author::is_unassigned`] before using the id as a
    /// foreign key.
    pub fn unassigned() -> Self {
        Self::default()
    }

    pub fn is_unassigned(&self) -> bool {
        self.id == UNASSIGNED_AUTHOR_ID
    }

    /// Foreign key value to store for this author (`None` for the sentinel).
    pub fn foreign_key(&self) -> Option<AuthorId> {
        if self.is_unassigned() {
            None
        } else {
            Some(self.id)
        }
    }

    /// An author view with no books expanded.
    pub fn from_row(row: AuthorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            books: Vec::new(),
        }
    }
}

// ── Book ────────────────────────────────────────────────────────────────────

/// A book and the author who wrote it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    #[serde(default)]
    pub author: Author,
    /// Current borrower. Not backed by a column yet.
    #[serde(rename = "borrower_id", default)]
    pub borrower: Option<UserId>,
}

// ── User ────────────────────────────────────────────────────────────────────

/// A library user.
///
/// `rented_books` is sampled fresh on every read and never persisted, so two
/// reads of the same user may disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub rented_books: Vec<Book>,
    #[serde(default)]
    pub borrowed_books: Vec<Book>,
}

impl User {
    pub fn from_row(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            rented_books: Vec::new(),
            borrowed_books: Vec::new(),
        }
    }
}
