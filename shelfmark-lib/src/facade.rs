//! The entry point used by the CLI and HTTP layers.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shelfmark_catalog::{Author, User};
use shelfmark_db::{LibraryStats, LibraryStore};

use crate::error::LibraryError;
use crate::reconstruct;
use crate::seed::{self, SeedReport, SeedSettings};

/// Library operations over a borrowed store handle.
///
/// The facade owns its random source. Build it with [`Library::new`] for a
/// `ChaCha8Rng` seeded from settings (or OS entropy), or with
/// [`Library::with_rng`] to inject one.
pub struct Library<'s, S: LibraryStore + ?Sized, R: Rng = ChaCha8Rng> {
    store: &'s S,
    rng: R,
    seed: SeedSettings,
}

impl<'s, S: LibraryStore + ?Sized> Library<'s, S, ChaCha8Rng> {
    pub fn new(store: &'s S, seed: SeedSettings) -> Self {
        let rng = match seed.rng_seed {
            Some(value) => ChaCha8Rng::seed_from_u64(value),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(store, rng, seed)
    }
}

impl<'s, S: LibraryStore + ?Sized, R: Rng> Library<'s, S, R> {
    pub fn with_rng(store: &'s S, rng: R, seed: SeedSettings) -> Self {
        Self { store, rng, seed }
    }

    pub fn seed_settings(&self) -> &SeedSettings {
        &self.seed
    }

    /// Seed every empty table. Tables that already have rows are untouched,
    /// so calling this twice inserts nothing the second time.
    pub fn ensure_seeded(&mut self) -> Result<SeedReport, LibraryError> {
        let stats = self.store.stats()?;
        log::debug!(
            "Row counts: users={}, books={}, authors={}",
            stats.users,
            stats.books,
            stats.authors
        );

        let report = seed::seed_empty_tables(&mut self.rng, self.store, &self.seed, &stats)?;
        if report.is_empty() {
            log::info!("All tables already populated; nothing to seed");
        }
        Ok(report)
    }

    /// Every user with a freshly sampled rental set. Either all users come
    /// back or the first error does.
    pub fn list_users_with_rentals(&mut self) -> Result<Vec<User>, LibraryError> {
        let book_ids = self.store.book_ids()?;
        reconstruct::list_users_with_rentals(&mut self.rng, self.store, &book_ids)
    }

    /// Every author with two levels of nesting (see [`reconstruct::list_authors`]).
    pub fn list_authors(&self) -> Result<Vec<Author>, LibraryError> {
        reconstruct::list_authors(self.store)
    }

    pub fn stats(&self) -> Result<LibraryStats, LibraryError> {
        Ok(self.store.stats()?)
    }
}

#[cfg(test)]
#[path = "tests/facade_tests.rs"]
mod tests;
