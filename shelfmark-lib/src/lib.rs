//! Library core: seeding, entity graph reconstruction, and random rental
//! assignment over a [`LibraryStore`](shelfmark_db::LibraryStore).
//!
//! Create a [`Library`] around a store handle, call
//! [`Library::ensure_seeded`] once at startup, then read through it.

pub mod error;
pub mod facade;
pub mod random;
pub mod reconstruct;
pub mod seed;
pub mod settings;

#[cfg(test)]
mod test_support;

pub use error::{LibraryError, SettingsError};
pub use facade::Library;
pub use reconstruct::{get_author_by_id, get_book_by_id, list_authors, MAX_NESTING_DEPTH};
pub use seed::{SeedReport, SeedSettings};
pub use settings::{ServerSettings, Settings};

// Re-export for convenience
pub use shelfmark_catalog::{Author, Book, Table, User};
pub use shelfmark_db::{LibraryStats, LibraryStore};
