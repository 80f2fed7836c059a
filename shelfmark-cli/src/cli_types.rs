use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shelfmark_lib::SeedSettings;

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(about = "Seed and browse a small library of authors, books, and users", long_about = None)]
pub(crate) struct Cli {
    /// Path to the library database file
    #[arg(long, global = true)]
    pub(crate) db: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub(crate) quiet: bool,

    /// Show debug output with timestamps
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Batch size and RNG overrides for commands that seed or sample.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct SeedArgs {
    /// Number of users to generate when the users table is empty
    #[arg(long)]
    pub(crate) users: Option<usize>,

    /// Number of books to generate when the books table is empty
    #[arg(long)]
    pub(crate) books: Option<usize>,

    /// Number of authors to generate when the authors table is empty
    #[arg(long)]
    pub(crate) authors: Option<usize>,

    /// Fixed RNG seed for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

impl SeedArgs {
    /// Layer these flags over the values from `settings.toml`.
    pub(crate) fn apply(&self, base: SeedSettings) -> SeedSettings {
        SeedSettings {
            users: self.users.unwrap_or(base.users),
            books: self.books.unwrap_or(base.books),
            authors: self.authors.unwrap_or(base.authors),
            rng_seed: self.seed.or(base.rng_seed),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Seed any empty tables, then print every user with their rentals
    Start {
        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Seed any empty tables and report what was inserted
    Seed {
        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Print every user with a freshly sampled set of rented books
    Users {
        /// Fixed RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print all authors with their books as JSON
    Authors,

    /// Show row counts for each table
    Stats,

    /// Delete the library database
    Reset {
        /// Confirm database deletion (required)
        #[arg(long)]
        confirm: bool,
    },

    /// Serve the author list over HTTP
    Serve {
        /// Address to bind (default from settings, then 127.0.0.1:8080)
        #[arg(long)]
        bind: Option<String>,

        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the active settings
    Show,

    /// Print the settings file path
    Path,
}
