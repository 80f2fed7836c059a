use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::open_library_db;

pub(crate) fn run_stats(db_path: &Path) -> Result<(), CliError> {
    if !db_path.exists() {
        log::warn!("No library database found at {}", db_path.display());
        log::info!("Run 'shelfmark seed' to create one.");
        return Ok(());
    }

    let conn = open_library_db(db_path)?;
    let stats = shelfmark_db::library_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query library stats: {}", e)))?;

    log::info!(
        "{}",
        "Library Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Authors:  {:>8}", stats.authors);
    log::info!("  Books:    {:>8}", stats.books);
    log::info!("  Users:    {:>8}", stats.users);

    Ok(())
}
