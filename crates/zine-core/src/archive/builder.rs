//! Builder for creating and configuring Archive instances.

use std::path::{Path, PathBuf};

use super::Archive;
use crate::error::{ArchiveError, Result};

/// Builder for creating and configuring Archive instances.
#[derive(Debug, Clone)]
pub struct ArchiveBuilder {
    database_path: Option<PathBuf>,
}

impl ArchiveBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/zines/zines.db` or `~/.local/share/zines/zines.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the archive, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::FileSystem` if the parent directory cannot be
    /// created, `ArchiveError::Connection` if the file cannot be opened and
    /// `ArchiveError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Archive> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ArchiveError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let archive = Archive::new(db_path);
        archive.with_database(|_| Ok(())).await?;
        Ok(archive)
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("zines")
            .place_data_file("zines.db")
            .map_err(|e| ArchiveError::XdgDirectory(e.to_string()))
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
