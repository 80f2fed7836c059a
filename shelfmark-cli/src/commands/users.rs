use std::path::Path;

use shelfmark_lib::{Library, SeedSettings, User};

use crate::CliError;

use super::open_library_db;

const SEPARATOR: &str = "---------------";

pub(crate) fn run_users(db_path: &Path, settings: SeedSettings) -> Result<(), CliError> {
    let conn = open_library_db(db_path)?;
    let mut library = Library::new(&conn, settings);

    let users = library.list_users_with_rentals()?;
    if users.is_empty() {
        log::warn!("No users in {}", db_path.display());
        log::info!("Run 'shelfmark seed' to generate some.");
        return Ok(());
    }

    log_user_report(&users);
    Ok(())
}

pub(crate) fn log_user_report(users: &[User]) {
    for line in user_report_lines(users) {
        log::info!("{}", line);
    }
}

/// One block per user: id and name, the rented books, then a separator.
pub(crate) fn user_report_lines(users: &[User]) -> Vec<String> {
    let mut lines = Vec::new();
    for user in users {
        lines.push(format!("ID: {}, Name: {}", user.id, user.name));
        lines.push("Rented books:".to_string());
        for book in &user.rented_books {
            lines.push(format!("  ID: {}, Title: {}", book.id, book.name));
        }
        lines.push(SEPARATOR.to_string());
    }
    lines
}

#[cfg(test)]
#[path = "tests/users_tests.rs"]
mod tests;
