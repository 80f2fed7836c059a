//! Seeding of empty tables with synthetic data.
//!
//! Each table is seeded only when it is empty, so running the orchestrator
//! against an already-seeded store inserts nothing. Tables are checked
//! users, books, authors, but generated authors first so that every new
//! book can reference a real author.
//!
//! There is no transaction around a batch. If an insert fails the batch
//! stops, the rows already written stay, and the table is no longer empty,
//! so a rerun will not repair it.

use rand::Rng;
use serde::{Deserialize, Serialize};
use shelfmark_catalog::*;
use shelfmark_db::{LibraryStats, LibraryStore};

use crate::error::LibraryError;
use crate::random::{
    fake_book_title, fake_person_name, random_candidate_ids, random_existing_author,
    sample_existing_books,
};

/// Generation order for empty tables.
pub const GENERATION_ORDER: [Table; 3] = [Table::Authors, Table::Books, Table::Users];

/// Batch sizes and the optional fixed RNG seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedSettings {
    pub users: usize,
    pub books: usize,
    pub authors: usize,
    /// Fixed seed for reproducible runs. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            users: 50,
            books: 100,
            authors: 10,
            rng_seed: None,
        }
    }
}

impl SeedSettings {
    pub fn batch_size(&self, table: Table) -> usize {
        match table {
            Table::Authors => self.authors,
            Table::Books => self.books,
            Table::Users => self.users,
        }
    }
}

/// What one seeding run inserted. A `None` batch means the table already
/// had rows and was left alone.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub authors: Option<Vec<Author>>,
    pub books: Option<Vec<Book>>,
    pub users: Option<Vec<User>>,
}

impl SeedReport {
    /// True when no table was seeded.
    pub fn is_empty(&self) -> bool {
        self.authors.is_none() && self.books.is_none() && self.users.is_none()
    }

    /// Number of rows inserted into `table`, if it was seeded.
    pub fn inserted(&self, table: Table) -> Option<usize> {
        match table {
            Table::Authors => self.authors.as_ref().map(Vec::len),
            Table::Books => self.books.as_ref().map(Vec::len),
            Table::Users => self.users.as_ref().map(Vec::len),
        }
    }

    /// One line per seeded table, in check order.
    pub fn summary(&self) -> String {
        Table::ALL
            .into_iter()
            .filter_map(|table| {
                self.inserted(table)
                    .map(|n| format!("Generated and inserted {table}: {n}\n"))
            })
            .collect()
    }
}

/// Tables that need seeding, in generation order.
pub fn tables_to_seed(stats: &LibraryStats) -> Vec<Table> {
    let empty: Vec<Table> = Table::ALL
        .into_iter()
        .filter(|t| stats.get(*t) == 0)
        .collect();
    GENERATION_ORDER
        .into_iter()
        .filter(|t| empty.contains(t))
        .collect()
}

/// Seed every table that is empty according to `stats`.
pub fn seed_empty_tables<S, R>(
    rng: &mut R,
    store: &S,
    settings: &SeedSettings,
    stats: &LibraryStats,
) -> Result<SeedReport, LibraryError>
where
    S: LibraryStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut report = SeedReport::default();

    for table in tables_to_seed(stats) {
        let count = settings.batch_size(table);
        log::info!("Seeding {count} {table}");
        match table {
            Table::Authors => {
                report.authors = Some(generate_and_insert_authors(rng, store, count)?);
            }
            Table::Books => {
                report.books = Some(generate_and_insert_books(rng, store, count)?);
            }
            Table::Users => {
                report.users = Some(generate_and_insert_users(rng, store, count)?);
            }
        }
    }

    Ok(report)
}

/// Insert `count` authors with generated names.
///
/// Each returned author carries a sample of existing books, probed by
/// random id. That sample is for reporting only and is not stored.
pub fn generate_and_insert_authors<S, R>(
    rng: &mut R,
    store: &S,
    count: usize,
) -> Result<Vec<Author>, LibraryError>
where
    S: LibraryStore + ?Sized,
    R: Rng + ?Sized,
{
    let book_count = probe_count(store)?;
    run_batch(Table::Authors, count, || {
        let name = fake_person_name(rng);
        let candidates = random_candidate_ids(rng, book_count);
        let books = sample_existing_books(rng, store, &candidates)?;
        let id = store.insert_author(&name)?;
        log::debug!("Inserted author {id}: {name}");
        Ok(Author { id, name, books })
    })
}

/// Insert `count` books, each written by a randomly picked existing author
/// (or no author at all if the authors table is empty).
pub fn generate_and_insert_books<S, R>(
    rng: &mut R,
    store: &S,
    count: usize,
) -> Result<Vec<Book>, LibraryError>
where
    S: LibraryStore + ?Sized,
    R: Rng + ?Sized,
{
    run_batch(Table::Books, count, || {
        let name = fake_book_title(rng);
        let author = random_existing_author(rng, store)?;
        if author.is_unassigned() {
            log::warn!("No authors exist; book '{name}' is stored without one");
        }
        let id = store.insert_book(&name, author.foreign_key())?;
        log::debug!("Inserted book {id}: {name}");
        Ok(Book {
            id,
            name,
            author,
            borrower: None,
        })
    })
}

/// Insert `count` users with generated names and a sampled rental set.
pub fn generate_and_insert_users<S, R>(
    rng: &mut R,
    store: &S,
    count: usize,
) -> Result<Vec<User>, LibraryError>
where
    S: LibraryStore + ?Sized,
    R: Rng + ?Sized,
{
    let book_count = probe_count(store)?;
    run_batch(Table::Users, count, || {
        let name = fake_person_name(rng);
        let candidates = random_candidate_ids(rng, book_count);
        let rented_books = sample_existing_books(rng, store, &candidates)?;
        let id = store.insert_user(&name)?;
        log::debug!("Inserted user {id}: {name}");
        Ok(User {
            id,
            name,
            rented_books,
            borrowed_books: Vec::new(),
        })
    })
}

/// How many candidate ids to probe: one per stored book.
fn probe_count<S: LibraryStore + ?Sized>(store: &S) -> Result<usize, LibraryError> {
    let books = store.count(Table::Books)?;
    Ok(usize::try_from(books).unwrap_or(0))
}

fn run_batch<T>(
    table: Table,
    count: usize,
    mut next: impl FnMut() -> Result<T, LibraryError>,
) -> Result<Vec<T>, LibraryError> {
    let mut batch = Vec::with_capacity(count);
    for _ in 0..count {
        match next() {
            Ok(item) => batch.push(item),
            Err(e) => {
                log::error!(
                    "Seeding {table} stopped after {} of {count} rows: {e}",
                    batch.len()
                );
                return Err(LibraryError::seed_partial(table, batch.len(), e));
            }
        }
    }
    log::info!("Inserted {} {table}", batch.len());
    Ok(batch)
}

#[cfg(test)]
#[path = "tests/seed_tests.rs"]
mod tests;
