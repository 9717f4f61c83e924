//! Record operations: list, fetch, create and update.

use log::warn;

use super::Archive;
use crate::{
    display::OperationStatus,
    error::Result,
    models::{EntityKind, Event, EventListing, Page, Publication, Record, RecordChanges},
    params::{CreateEvent, CreatePublication, FetchRecord, ListEvents, ListPublications, UpdateRecord},
};

impl Archive {
    /// Lists one page of titled events matching the filter.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::InvalidInput` for page 0.
    pub async fn list_events(&self, params: &ListEvents) -> Result<Page<EventListing>> {
        let params = params.clone();
        self.with_database(move |db| db.list_events(&params)).await
    }

    /// Lists one page of publications matching the filter.
    pub async fn list_publications(&self, params: &ListPublications) -> Result<Page<Publication>> {
        let params = params.clone();
        self.with_database(move |db| db.list_publications(&params))
            .await
    }

    /// Fetches one record by type and ID.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::InvalidEntityType` for an unknown type and the
    /// type's not-found error when no row has the ID.
    pub async fn fetch(&self, params: &FetchRecord) -> Result<Record> {
        let kind: EntityKind = params.entity_type.parse()?;
        let id = params.id;

        self.with_database(move |db| {
            let record = match kind {
                EntityKind::Event => db.get_event(id)?.map(Record::Event),
                EntityKind::Publication => db.get_publication(id)?.map(Record::Publication),
            };
            record.ok_or_else(|| kind.not_found(id))
        })
        .await
    }

    /// Creates an event. Only the title is required.
    pub async fn create_event(&self, params: &CreateEvent) -> Result<Event> {
        let params = params.clone();
        self.with_database(move |db| db.create_event(&params)).await
    }

    /// Creates a publication. Only the title is required.
    pub async fn create_publication(&self, params: &CreatePublication) -> Result<Publication> {
        let params = params.clone();
        self.with_database(move |db| db.create_publication(&params))
            .await
    }

    /// Applies a form-style update and returns the stored record.
    ///
    /// Blank or missing text fields are written as `"NA"` (`"NA-NA-NA"` for
    /// dates). The change set is validated before any connection is opened.
    pub async fn update(&self, params: &UpdateRecord) -> Result<Record> {
        let changes = RecordChanges::try_from(params)?;
        let id = params.id;

        self.with_database(move |db| match changes {
            RecordChanges::Event(changes) => db.update_event(id, &changes).map(Record::Event),
            RecordChanges::Publication(changes) => {
                db.update_publication(id, &changes).map(Record::Publication)
            }
        })
        .await
    }

    /// Update as seen by an interactive user: any failure other than an
    /// unreachable store becomes an `Error:` status instead of an error.
    pub async fn update_status(&self, params: &UpdateRecord) -> Result<OperationStatus> {
        match self.update(params).await {
            Ok(record) => Ok(OperationStatus::success(format!(
                "Updated {} {}",
                record.kind(),
                record.id()
            ))),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                warn!("Update of {} {} failed: {e}", params.entity_type, params.id);
                Ok(OperationStatus::failure(e.to_string()))
            }
        }
    }
}
