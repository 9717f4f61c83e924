//! High-level archive API for records, reports and maintenance.
//!
//! [`Archive`] is the entry point interfaces talk to. It holds only the path
//! of the database file: every operation opens a fresh [`Database`] on a
//! blocking worker thread, runs its statements and drops the connection
//! before the future resolves, whether the operation succeeded or not.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │     Archive     │    │    Database     │
//! │     (CLI)       │───▶│ (record_ops,    │───▶│   (via db/)     │
//! │                 │    │  report_ops,    │    │                 │
//! │                 │    │  maintenance)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Archive`] instances
//! - [`record_ops`]: Listing, fetching, creating and updating records
//! - [`report_ops`]: Read-only aggregate reports
//! - [`maintenance`]: Imports, cleaning passes and the destructive reset
//!
//! # Usage
//!
//! ```rust,no_run
//! use zine_core::{params::ListEvents, ArchiveBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let archive = ArchiveBuilder::new()
//!     .with_database_path(Some("/tmp/zines.db"))
//!     .build()
//!     .await?;
//!
//! let page = archive.list_events(&ListEvents::default()).await?;
//! println!("{} events in total", page.total_count);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{ArchiveError, Result},
};

pub mod builder;
pub mod maintenance;
pub mod record_ops;
pub mod report_ops;


pub use builder::ArchiveBuilder;

/// Main archive interface.
#[derive(Debug, Clone)]
pub struct Archive {
    pub(crate) db_path: PathBuf,
}

impl Archive {
    /// Creates an archive over the given database file.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the database file this archive opens.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `operation` against a freshly opened connection on a blocking
    /// thread. The connection is dropped when `operation` returns.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| ArchiveError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
