//! Error types for the archive library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all archive operations.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The storage file could not be opened
    #[error("Failed to open database at '{path}': {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    /// Database query or statement errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Publication not found for the given ID
    #[error("Publication with ID {id} not found")]
    PublicationNotFound { id: u64 },
    /// Event not found for the given ID
    #[error("Event with ID {id} not found")]
    EventNotFound { id: u64 },
    /// Record type discriminator is not one of the known tables
    #[error("Unknown record type '{name}'. Expected 'event' or 'publication'")]
    InvalidEntityType { name: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// CSV decoding errors
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of failures, used at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Storage unreachable; the only fatal kind
    Connection,
    /// A required field was empty or malformed
    Validation,
    /// A referenced record or record type does not exist
    Lookup,
    /// Constraint or runtime storage failure
    Storage,
    /// The requested record id is absent
    NotFound,
}

impl ArchiveError {
    /// Creates a new invalid input error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Classifies the error into one of the five failure kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection { .. } | Self::FileSystem { .. } | Self::XdgDirectory(_) => {
                ErrorKind::Connection
            }
            Self::InvalidInput { .. } => ErrorKind::Validation,
            Self::InvalidEntityType { .. } => ErrorKind::Lookup,
            Self::Database { source, .. } if is_foreign_key_violation(source) => ErrorKind::Lookup,
            Self::PublicationNotFound { .. } | Self::EventNotFound { .. } => ErrorKind::NotFound,
            Self::Database { .. } | Self::Csv { .. } | Self::Configuration { .. } => {
                ErrorKind::Storage
            }
        }
    }

    /// Returns true if this error is fatal to the calling process.
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Connection
    }
}

fn is_foreign_key_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ArchiveError::database_error(message, e))
    }
}

/// Result type alias for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            ArchiveError::invalid_input("title", "empty").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            ArchiveError::InvalidEntityType {
                name: "zine".to_string()
            }
            .kind(),
            ErrorKind::Lookup
        );
        assert_eq!(
            ArchiveError::EventNotFound { id: 3 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ArchiveError::XdgDirectory("no home".to_string()).kind(),
            ErrorKind::Connection
        );
        assert_eq!(
            ArchiveError::database_error("boom", rusqlite::Error::InvalidQuery).kind(),
            ErrorKind::Storage
        );
    }

    #[test]
    fn test_only_connection_errors_are_fatal() {
        assert!(ArchiveError::XdgDirectory("x".to_string()).is_fatal());
        assert!(!ArchiveError::PublicationNotFound { id: 1 }.is_fatal());
    }

    #[test]
    fn test_invalid_input_message() {
        let err = ArchiveError::invalid_input("title", "Title is required");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'title': Title is required"
        );
    }
}
