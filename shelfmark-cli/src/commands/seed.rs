use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use shelfmark_lib::{Library, SeedReport, SeedSettings};

use crate::CliError;

use super::open_library_db;

pub(crate) fn run_seed(db_path: &Path, settings: SeedSettings) -> Result<(), CliError> {
    let conn = open_library_db(db_path)?;
    let mut library = Library::new(&conn, settings);

    let report = library.ensure_seeded()?;
    log_seed_report(&report);

    let stats = library.stats()?;
    crate::log_blank();
    log::info!(
        "  Database: {} ({} authors, {} books, {} users)",
        db_path.display(),
        stats.authors,
        stats.books,
        stats.users,
    );

    Ok(())
}

/// Log one line per seeded table.
pub(crate) fn log_seed_report(report: &SeedReport) {
    for line in report.summary().lines() {
        log::info!("{}", line.if_supports_color(Stdout, |t| t.green()));
    }
}
