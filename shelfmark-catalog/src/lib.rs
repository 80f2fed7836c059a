//! Library data model: authors, books, users and their flat row forms.
//!
//! This crate defines the domain types without any database dependencies.
//! Rows come out of `shelfmark-db`; the nested views are assembled by
//! `shelfmark-lib` and serialized as-is by the CLI and HTTP layer.

pub mod types;

pub use types::*;
