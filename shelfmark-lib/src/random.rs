//! Random assignment: rental samples, author picks, and synthetic names.
//!
//! Every function takes the random source explicitly so callers (and tests)
//! decide whether it is seeded. Nothing here mutates the caller's id list;
//! shuffles happen on a private copy.

use std::ops::RangeInclusive;

use fake::Fake;
use fake::faker::lorem::raw::Words;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use shelfmark_catalog::{Author, Book, BookId};
use shelfmark_db::LibraryStore;

use crate::error::LibraryError;
use crate::reconstruct::get_book_by_id;

/// Upper bound on the number of books in one rental sample.
pub const MAX_RENTED_BOOKS: usize = 5;

/// Range probed when guessing at existing book ids during seeding.
pub const CANDIDATE_ID_RANGE: RangeInclusive<BookId> = 1..=1000;

/// Pick the ids for one rental sample.
///
/// Returns between 1 and `min(MAX_RENTED_BOOKS, ids.len())` distinct
/// positions of `ids`, or nothing when `ids` is empty.
pub fn pick_subset_ids<R: Rng + ?Sized>(rng: &mut R, ids: &[BookId]) -> Vec<BookId> {
    if ids.is_empty() {
        return Vec::new();
    }

    let max = MAX_RENTED_BOOKS.min(ids.len());
    let count = rng.random_range(1..=max);

    let mut shuffled = ids.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Sample a rental set from ids that are known to exist.
///
/// Each picked id is resolved to a full [`Book`]; an id that does not
/// resolve is a [`LibraryError::NotFound`].
pub fn random_book_subset<S, R>(
    rng: &mut R,
    store: &S,
    ids: &[BookId],
) -> Result<Vec<Book>, LibraryError>
where
    S: LibraryStore + ?Sized,
    R: Rng + ?Sized,
{
    pick_subset_ids(rng, ids)
        .into_iter()
        .map(|id| get_book_by_id(store, id))
        .collect()
}

/// Sample a rental set from guessed ids, skipping any that don't exist.
///
/// Guesses may repeat; each book appears at most once in the sample.
pub fn sample_existing_books<S, R>(
    rng: &mut R,
    store: &S,
    candidate_ids: &[BookId],
) -> Result<Vec<Book>, LibraryError>
where
    S: LibraryStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut candidates = candidate_ids.to_vec();
    candidates.sort_unstable();
    candidates.dedup();

    let mut books = Vec::new();
    for id in pick_subset_ids(rng, &candidates) {
        if store.find_book(id)?.is_none() {
            log::trace!("Skipping candidate book id {id}: no such book");
            continue;
        }
        books.push(get_book_by_id(store, id)?);
    }
    Ok(books)
}

/// Pick one existing author uniformly, or the unassigned sentinel if there
/// are none. The returned author's books are not expanded.
pub fn random_existing_author<S, R>(rng: &mut R, store: &S) -> Result<Author, LibraryError>
where
    S: LibraryStore + ?Sized,
    R: Rng + ?Sized,
{
    let rows = store.author_rows()?;
    Ok(rows
        .choose(rng)
        .cloned()
        .map(Author::from_row)
        .unwrap_or_else(Author::unassigned))
}

/// `count` independent ids drawn uniformly from [`CANDIDATE_ID_RANGE`].
pub fn random_candidate_ids<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<BookId> {
    (0..count)
        .map(|_| rng.random_range(CANDIDATE_ID_RANGE))
        .collect()
}

/// A plausible person name for a user or author.
pub fn fake_person_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    Name(EN).fake_with_rng(rng)
}

/// A plausible book title: two to four title-cased words.
pub fn fake_book_title<R: Rng + ?Sized>(rng: &mut R) -> String {
    let words: Vec<String> = Words(EN, 2..5).fake_with_rng(rng);
    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/random_tests.rs"]
mod tests;
