use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use shelfmark_lib::Settings;
use shelfmark_lib::settings::{load_settings_string, settings_path};

use crate::CliError;

pub(crate) fn run_config_show(settings: &Settings, db_path: &Path) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "Shelfmark Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display(),
            "(found)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display(),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    log::info!("  Database:      {}", db_path.display());
    log::info!("  Bind address:  {}", settings.server.bind);
    log::info!(
        "  Seed sizes:    {} users, {} books, {} authors",
        settings.seed.users,
        settings.seed.books,
        settings.seed.authors,
    );
    match settings.seed.rng_seed {
        Some(seed) => log::info!("  RNG seed:      {}", seed),
        None => log::info!("  RNG seed:      (random)"),
    }

    if let Some(contents) = load_settings_string() {
        crate::log_blank();
        log::info!("{}", "settings.toml".if_supports_color(Stdout, |t| t.bold()));
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }

    Ok(())
}

pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}
