//! Database operations and SQLite management for publications and events.
//!
//! This module provides the low-level storage layer of the archive. A
//! [`Database`] wraps a single SQLite connection; the async facade opens one
//! per operation and drops it before returning, so no connection outlives the
//! call that created it.

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::error::{ArchiveError, Result};

pub mod cleaning;
pub mod event_queries;
pub mod publication_queries;
pub mod query;
pub mod report_queries;
pub mod rows;
pub mod schema;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a database connection and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::Connection` if the file cannot be opened and
    /// `ArchiveError::Database` if the schema cannot be created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening database at {}", path.display());
        let connection = Connection::open(path).map_err(|source| ArchiveError::Connection {
            path: path.to_path_buf(),
            source,
        })?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
