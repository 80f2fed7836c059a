use std::path::Path;

use shelfmark_lib::{Library, SeedSettings};

use crate::CliError;

use super::open_library_db;
use super::seed::log_seed_report;

/// Seed what is missing, then hand the connection to the HTTP server.
pub(crate) fn run_serve(db_path: &Path, bind: &str, settings: SeedSettings) -> Result<(), CliError> {
    let conn = open_library_db(db_path)?;

    let report = Library::new(&conn, settings).ensure_seeded()?;
    log_seed_report(&report);

    crate::server::run(conn, bind)
}
