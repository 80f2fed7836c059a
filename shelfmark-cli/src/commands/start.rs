use std::path::Path;

use shelfmark_lib::{Library, SeedSettings};

use crate::CliError;

use super::open_library_db;
use super::seed::log_seed_report;
use super::users::log_user_report;

/// Seed what is missing, then print the user report.
pub(crate) fn run_start(db_path: &Path, settings: SeedSettings) -> Result<(), CliError> {
    let conn = open_library_db(db_path)?;
    let mut library = Library::new(&conn, settings);

    let report = library.ensure_seeded()?;
    log_seed_report(&report);
    crate::log_blank();

    let users = library.list_users_with_rentals()?;
    log_user_report(&users);

    Ok(())
}
