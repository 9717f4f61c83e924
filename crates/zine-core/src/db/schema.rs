//! Schema initialization and the destructive reset.

use log::info;

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");
const RESOURCES_SQL: &str = include_str!("../../assets/resources.sql");

// Children first so the foreign key never blocks the drop.
const DROP_ALL_SQL: &str = "DROP TABLE IF EXISTS events;
DROP TABLE IF EXISTS resources;
DROP TABLE IF EXISTS publications;";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }

    /// Drops every table, including the transitional resources table, and
    /// recreates the steady-state schema. All stored records are lost.
    pub fn reset(&mut self) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute_batch(DROP_ALL_SQL)
            .db_context("Failed to drop tables")?;
        tx.execute_batch(SCHEMA_SQL)
            .db_context("Failed to recreate database schema")?;

        tx.commit().db_context("Failed to commit transaction")?;
        info!("Database reset; all tables recreated");
        Ok(())
    }

    /// Drops and recreates the transitional resources table.
    pub fn recreate_resources_table(&self) -> Result<()> {
        self.connection
            .execute_batch(RESOURCES_SQL)
            .db_context("Failed to recreate resources table")
    }

    /// Returns true if a table with the given name exists.
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
                [name],
                |row| row.get(0),
            )
            .db_context("Failed to inspect schema")
    }
}
