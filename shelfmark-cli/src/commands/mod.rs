pub(crate) mod authors;
pub(crate) mod config;
pub(crate) mod reset;
pub(crate) mod seed;
pub(crate) mod serve;
pub(crate) mod start;
pub(crate) mod stats;
pub(crate) mod users;

use std::path::Path;

use rusqlite::Connection;

use crate::CliError;

/// Open (or create) the library database, with the schema in place.
pub(crate) fn open_library_db(db_path: &Path) -> Result<Connection, CliError> {
    shelfmark_db::open_database(db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open library database at {}: {}",
            db_path.display(),
            e
        ))
    })
}
