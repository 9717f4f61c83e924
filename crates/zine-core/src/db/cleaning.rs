//! Maintenance passes over imported data: resource staging and migration,
//! purging, deduplication and event-type renaming.

use log::info;
use rusqlite::params;

use crate::{
    error::{ArchiveError, DatabaseResultExt, Result},
    params::{MigrateResources, PurgeEvents, RenameEventType},
};

const INSERT_RESOURCE_SQL: &str = "INSERT INTO resources (resource_title, volume, issue, \
    resource_type, location, address, city, state, country, source_publication, description) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";

const MIGRATE_RESOURCES_SQL: &str = "INSERT INTO events (event_title, description, \
    publication_id, event_date, city, state, country, event_type, location, address, \
    source_publication) \
    SELECT COALESCE(r.resource_title, 'NA'), r.description, p.pub_id, NULL, r.city, r.state, \
    r.country, ?1, r.location, r.address, r.source_publication \
    FROM resources r \
    LEFT JOIN publications p ON p.pub_id = (SELECT MIN(pub_id) FROM publications \
        WHERE volume = r.volume AND issue_number = r.issue) \
    WHERE r.resource_type = ?2 \
    ORDER BY r.resource_id";

const DELETE_MIGRATED_SQL: &str = "DELETE FROM resources WHERE resource_type = ?1";

const DEDUPE_EVENTS_SQL: &str = "DELETE FROM events WHERE event_id NOT IN ( \
    SELECT MIN(event_id) FROM events GROUP BY event_title, description, publication_id, \
    event_date, city, state, country, event_type, location, address, source_publication)";

/// Column values for one staged resource row.
#[derive(Debug, Clone, Default)]
pub struct NewResource<'a> {
    pub title: &'a str,
    pub volume: Option<i64>,
    pub issue: Option<i64>,
    pub resource_type: &'a str,
    pub location: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub source_publication: &'a str,
    pub description: &'a str,
}

impl super::Database {
    /// Stages one resource row. The resources table must already exist.
    pub fn insert_resource(&self, resource: &NewResource<'_>) -> Result<u64> {
        self.connection
            .execute(
                INSERT_RESOURCE_SQL,
                params![
                    resource.title,
                    resource.volume,
                    resource.issue,
                    resource.resource_type,
                    resource.location,
                    resource.address,
                    resource.city,
                    resource.state,
                    resource.country,
                    resource.source_publication,
                    resource.description,
                ],
            )
            .db_context("Failed to insert resource")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Counts staged resources of one category.
    pub fn count_resources(&self, category: &str) -> Result<u64> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM resources WHERE resource_type = ?1",
                [category],
                |row| row.get::<_, i64>(0),
            )
            .map(|n| n as u64)
            .db_context("Failed to count resources")
    }

    /// Moves every staged resource of one category into `events`.
    ///
    /// The insert and the delete share a transaction. Returns the number of
    /// events created.
    pub fn migrate_resources(&mut self, params: &MigrateResources) -> Result<u64> {
        let category = params.category.trim();
        if category.is_empty() {
            return Err(ArchiveError::invalid_input(
                "category",
                "Resource category is required",
            ));
        }
        if !self.table_exists("resources")? {
            return Err(ArchiveError::Configuration {
                message: "No resources table; import resources first".to_string(),
            });
        }

        let event_type = params
            .event_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(category);

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let moved = tx
            .execute(MIGRATE_RESOURCES_SQL, params![event_type, category])
            .db_context("Failed to copy resources into events")?;
        tx.execute(DELETE_MIGRATED_SQL, [category])
            .db_context("Failed to delete migrated resources")?;

        tx.commit().db_context("Failed to commit transaction")?;
        info!("Moved {moved} '{category}' resources into events as '{event_type}'");
        Ok(moved as u64)
    }

    /// Deletes events whose IDs fall in an inclusive range.
    pub fn purge_events(&self, params: &PurgeEvents) -> Result<u64> {
        let (from, to) = params.bounds()?;
        let deleted = self
            .connection
            .execute(
                "DELETE FROM events WHERE event_id BETWEEN ?1 AND ?2",
                params![from, to],
            )
            .db_context("Failed to purge events")?;

        info!("Purged {deleted} events in [{}, {}]", params.from, params.to);
        Ok(deleted as u64)
    }

    /// Deletes events identical on every column but the ID, keeping the
    /// lowest ID of each group.
    pub fn dedupe_events(&self) -> Result<u64> {
        let deleted = self
            .connection
            .execute(DEDUPE_EVENTS_SQL, [])
            .db_context("Failed to delete duplicate events")?;

        info!("Removed {deleted} duplicate events");
        Ok(deleted as u64)
    }

    /// Renames an exact event-type value across all events.
    pub fn rename_event_type(&self, params: &RenameEventType) -> Result<u64> {
        let from = params.from.trim();
        let to = params.to.trim();
        if from.is_empty() || to.is_empty() {
            return Err(ArchiveError::invalid_input(
                "event_type",
                "Both the old and new event type are required",
            ));
        }

        let renamed = self
            .connection
            .execute(
                "UPDATE events SET event_type = ?1 WHERE event_type = ?2",
                params![to, from],
            )
            .db_context("Failed to rename event type")?;

        info!("Renamed event type '{from}' to '{to}' on {renamed} events");
        Ok(renamed as u64)
    }
}
