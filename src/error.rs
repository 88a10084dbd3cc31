//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for docq operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a documentation database fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No database exists at the location.
    #[error("Documentation database not found at {}", path.display())]
    NotFound { path: PathBuf },
    /// The database file could not be read.
    #[error("Failed to read documentation database at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The database file is not a valid documentation database.
    #[error("Failed to parse documentation database at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Outcomes of a lookup session that end the process with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No query was given, or it was blank.
    #[error("Usage: docq [options] <Path to object>\nSee docq --help for more options.")]
    EmptyQuery,
    /// Neither exact nor pattern search found anything.
    #[error("No documentation for `{query}'")]
    NoDocumentation { query: String },
    /// The disambiguation answer was not a listed number.
    #[error("`{answer}' is an invalid choice.")]
    InvalidChoice { answer: String },
}

impl SessionError {
    /// Whether the message belongs on stdout (usage) rather than stderr.
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::EmptyQuery)
    }
}
