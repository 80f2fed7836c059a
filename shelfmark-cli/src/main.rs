//! shelfmark CLI
//!
//! Seeds a small library database with synthetic authors, books, and users,
//! and reads it back as a text report, JSON, or over HTTP.

mod cli_types;
mod commands;
mod error;
mod server;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use shelfmark_lib::SeedSettings;
use shelfmark_lib::settings::{load_settings, resolve_database_path};

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings()?;
    let db_path = resolve_database_path(cli.db, &settings);

    match cli.command {
        Commands::Start { seed } => commands::start::run_start(&db_path, seed.apply(settings.seed)),
        Commands::Seed { seed } => commands::seed::run_seed(&db_path, seed.apply(settings.seed)),
        Commands::Users { seed } => {
            let seed = SeedSettings {
                rng_seed: seed.or(settings.seed.rng_seed),
                ..settings.seed
            };
            commands::users::run_users(&db_path, seed)
        }
        Commands::Authors => commands::authors::run_authors(&db_path),
        Commands::Stats => commands::stats::run_stats(&db_path),
        Commands::Reset { confirm } => commands::reset::run_reset(&db_path, confirm),
        Commands::Serve { bind, seed } => {
            let bind = bind.unwrap_or_else(|| settings.server.bind.clone());
            commands::serve::run_serve(&db_path, &bind, seed.apply(settings.seed))
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings, &db_path),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}

/// Install the logger. Reports are printed through `log::info!`, so the
/// default format is the bare message; `--verbose` adds level and timestamp.
/// `RUST_LOG` overrides the level chosen by the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| {
            if record.level() <= log::Level::Warn {
                writeln!(buf, "{}: {}", record.level(), record.args())
            } else {
                writeln!(buf, "{}", record.args())
            }
        });
    }

    builder.parse_default_env();
    builder.init();
}

/// Print an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
