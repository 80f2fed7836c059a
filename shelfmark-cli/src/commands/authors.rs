use std::path::Path;

use shelfmark_lib::list_authors;

use crate::CliError;

use super::open_library_db;

/// Print every author, two levels deep, as pretty JSON on stdout.
pub(crate) fn run_authors(db_path: &Path) -> Result<(), CliError> {
    let conn = open_library_db(db_path)?;
    let authors = list_authors(&conn)?;

    let json = serde_json::to_string_pretty(&authors)
        .map_err(|e| CliError::other(format!("Failed to encode authors: {}", e)))?;
    println!("{}", json);

    Ok(())
}
