use shelfmark_lib::{LibraryError, SettingsError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or queried
    #[error("Database error: {0}")]
    Database(String),

    /// Settings file could not be read
    #[error("Config error: {0}")]
    Config(#[from] SettingsError),

    /// Library operation failed
    #[error("{0}")]
    Library(#[from] LibraryError),

    /// HTTP server could not start or stopped with an error
    #[error("Server error: {0}")]
    Server(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
