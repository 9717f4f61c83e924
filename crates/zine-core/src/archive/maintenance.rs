//! Imports, cleaning passes and the destructive reset.

use super::Archive;
use crate::{
    error::Result,
    importer::{ImportSummary, ResourceSummary},
    params::{ImportFiles, ImportResources, MigrateResources, PurgeEvents, RenameEventType},
};

impl Archive {
    /// Drops every table and recreates the schema.
    pub async fn reset(&self) -> Result<()> {
        self.with_database(|db| db.reset()).await
    }

    /// Loads publications and then events from two CSV files.
    pub async fn import(&self, params: &ImportFiles) -> Result<ImportSummary> {
        let params = params.clone();
        self.with_database(move |db| db.import_csv(&params)).await
    }

    /// Recreates the resources table from a CSV file.
    pub async fn import_resources(&self, params: &ImportResources) -> Result<ResourceSummary> {
        let path = params.path.clone();
        self.with_database(move |db| db.import_resources(&path))
            .await
    }

    /// Moves one resource category into events; returns the number moved.
    pub async fn migrate_resources(&self, params: &MigrateResources) -> Result<u64> {
        let params = params.clone();
        self.with_database(move |db| db.migrate_resources(&params))
            .await
    }

    /// Deletes events in an inclusive ID range; returns the number deleted.
    pub async fn purge_events(&self, params: &PurgeEvents) -> Result<u64> {
        let params = params.clone();
        self.with_database(move |db| db.purge_events(&params)).await
    }

    /// Removes duplicate events; returns the number deleted.
    pub async fn dedupe_events(&self) -> Result<u64> {
        self.with_database(|db| db.dedupe_events()).await
    }

    /// Renames an exact event-type value; returns the number of events changed.
    pub async fn rename_event_type(&self, params: &RenameEventType) -> Result<u64> {
        let params = params.clone();
        self.with_database(move |db| db.rename_event_type(&params))
            .await
    }
}
