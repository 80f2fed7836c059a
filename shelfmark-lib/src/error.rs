use shelfmark_catalog::Table;
use shelfmark_db::StoreError;
use thiserror::Error;

/// Errors surfaced by the library layer.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The store failed (connection, query, or constraint).
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An id taken from the store no longer resolves. This is a consistency
    /// bug in the data, not a user error.
    #[error("Inconsistent store: {entity} {id} was referenced but does not exist")]
    NotFound { entity: &'static str, id: i64 },

    /// A seed batch aborted part way through; `inserted` rows stay behind.
    #[error("Seeding {table} aborted after {inserted} rows: {source}")]
    SeedPartialFailure {
        table: Table,
        inserted: usize,
        #[source]
        source: Box<LibraryError>,
    },
}

impl LibraryError {
    /// Lift a store error from the read path, promoting missing rows to
    /// [`LibraryError::NotFound`].
    pub(crate) fn from_lookup(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Store(other),
        }
    }

    pub(crate) fn seed_partial(table: Table, inserted: usize, source: LibraryError) -> Self {
        Self::SeedPartialFailure {
            table,
            inserted,
            source: Box::new(source),
        }
    }
}

/// Errors loading `settings.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
