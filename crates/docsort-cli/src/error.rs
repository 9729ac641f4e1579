//! Error types for docsort-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A file's content could not be sorted
    #[error("{}: {source}", path.display())]
    Sort {
        path: PathBuf,
        #[source]
        source: docsort_core::Error,
    },

    /// Error from docsort-fs
    #[error(transparent)]
    Fs(#[from] docsort_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The log subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}

impl CliError {
    pub fn sort(path: impl Into<PathBuf>, source: docsort_core::Error) -> Self {
        Self::Sort {
            path: path.into(),
            source,
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
