//! Entity graph reconstruction.
//!
//! Nested views are rebuilt from flat rows by keyed follow-up lookups rather
//! than SQL joins: fetch the rows, then enrich each one. The `*_view`
//! functions do the assembly and never touch the store.
//!
//! Author→Books→Author is a cycle, so expansion is capped at
//! [`MAX_NESTING_DEPTH`] levels below the entry object. An author's own
//! id and name are always resolved; only the `books` collection is cut.

use rand::Rng;
use shelfmark_catalog::*;
use shelfmark_db::LibraryStore;

use crate::error::LibraryError;
use crate::random::random_book_subset;

/// Levels of nesting expanded below an entry object.
///
/// With 2, `list_authors` yields Author → Books → Author, and that innermost
/// author has no books.
pub const MAX_NESTING_DEPTH: usize = 2;

// ── Pure Assembly ───────────────────────────────────────────────────────────

pub fn author_view(row: AuthorRow, books: Vec<Book>) -> Author {
    Author {
        id: row.id,
        name: row.name,
        books,
    }
}

pub fn book_view(row: BookRow, author: Author) -> Book {
    Book {
        id: row.id,
        name: row.name,
        author,
        borrower: None,
    }
}

pub fn user_view(row: UserRow, rented_books: Vec<Book>) -> User {
    User {
        rented_books,
        ..User::from_row(row)
    }
}

// ── Authors ─────────────────────────────────────────────────────────────────

/// All authors, each with their books, each book with its author.
pub fn list_authors<S: LibraryStore + ?Sized>(store: &S) -> Result<Vec<Author>, LibraryError> {
    store
        .author_rows()?
        .into_iter()
        .map(|row| author_with_books(store, row, MAX_NESTING_DEPTH))
        .collect()
}

/// One author, expanded the same way as [`list_authors`].
pub fn get_author_by_id<S: LibraryStore + ?Sized>(
    store: &S,
    id: AuthorId,
) -> Result<Author, LibraryError> {
    let row = store.author(id).map_err(LibraryError::from_lookup)?;
    author_with_books(store, row, MAX_NESTING_DEPTH)
}

/// The books written by `author_id`, each with its author resolved (that
/// author's books not expanded).
pub fn list_books_by_author<S: LibraryStore + ?Sized>(
    store: &S,
    author_id: AuthorId,
) -> Result<Vec<Book>, LibraryError> {
    books_by_author(store, author_id, 1)
}

fn books_by_author<S: LibraryStore + ?Sized>(
    store: &S,
    author_id: AuthorId,
    depth: usize,
) -> Result<Vec<Book>, LibraryError> {
    store
        .book_rows_by_author(author_id)?
        .into_iter()
        .map(|row| book_with_author(store, row, depth))
        .collect()
}

fn author_with_books<S: LibraryStore + ?Sized>(
    store: &S,
    row: AuthorRow,
    depth: usize,
) -> Result<Author, LibraryError> {
    if depth == 0 {
        return Ok(Author::from_row(row));
    }
    let books = books_by_author(store, row.id, depth - 1)?;
    Ok(author_view(row, books))
}

// ── Books ───────────────────────────────────────────────────────────────────

/// A single book with its author resolved (author's books not expanded).
///
/// The id is expected to come from the store, so a miss is
/// [`LibraryError::NotFound`].
pub fn get_book_by_id<S: LibraryStore + ?Sized>(
    store: &S,
    id: BookId,
) -> Result<Book, LibraryError> {
    let row = store.book(id).map_err(LibraryError::from_lookup)?;
    book_with_author(store, row, 0)
}

fn book_with_author<S: LibraryStore + ?Sized>(
    store: &S,
    row: BookRow,
    depth: usize,
) -> Result<Book, LibraryError> {
    // A fresh lookup per book, not the outer author, so the result reflects
    // the stored foreign key.
    let author = match row.author_id {
        None => Author::unassigned(),
        Some(author_id) => {
            let author_row = store.author(author_id).map_err(LibraryError::from_lookup)?;
            author_with_books(store, author_row, depth.saturating_sub(1))?
        }
    };
    Ok(book_view(row, author))
}

// ── Users ───────────────────────────────────────────────────────────────────

/// All users, each with a freshly sampled rental set drawn from `book_ids`.
pub fn list_users_with_rentals<S, R>(
    rng: &mut R,
    store: &S,
    book_ids: &[BookId],
) -> Result<Vec<User>, LibraryError>
where
    S: LibraryStore + ?Sized,
    R: Rng + ?Sized,
{
    store
        .user_rows()?
        .into_iter()
        .map(|row| Ok(user_view(row, random_book_subset(rng, store, book_ids)?)))
        .collect()
}

#[cfg(test)]
#[path = "tests/reconstruct_tests.rs"]
mod tests;
