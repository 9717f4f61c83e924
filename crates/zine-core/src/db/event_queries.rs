//! Event CRUD operations and listing queries.

use rusqlite::{params, OptionalExtension};

use super::{
    query::{event_conditions, event_count_sql, event_page_sql},
    rows::{event_from_row, listing_from_row, EVENT_COLUMNS},
};
use crate::{
    error::{ArchiveError, DatabaseResultExt, Result},
    models::{page::offset, Event, EventChanges, EventListing, Page},
    params::{validate_page, CreateEvent, ListEvents},
};

const INSERT_EVENT_SQL: &str = "INSERT INTO events (publication_id, event_title, event_type, \
    event_date, location, address, city, state, country, description, source_publication) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const UPDATE_EVENT_SQL: &str = "UPDATE events SET event_title = ?1, event_type = ?2, \
    event_date = ?3, location = ?4, address = ?5, city = ?6, state = ?7, country = ?8, \
    description = ?9, source_publication = ?10, \
    publication_id = COALESCE(?11, publication_id) WHERE event_id = ?12";
const COUNT_EVENTS_SQL: &str = "SELECT COUNT(*) FROM events";

/// Column values for one new event row.
///
/// Shared by interactive creation and the importers so that every insert goes
/// through the same statement.
#[derive(Debug, Clone, Default)]
pub struct NewEvent<'a> {
    pub publication_id: Option<u64>,
    pub title: &'a str,
    pub event_type: Option<&'a str>,
    pub event_date: Option<&'a str>,
    pub location: Option<&'a str>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub country: Option<&'a str>,
    pub description: Option<&'a str>,
    pub source_publication: Option<&'a str>,
}

/// Absent optional input is stored as an empty string.
pub(crate) fn or_empty(value: &Option<String>) -> Option<&str> {
    Some(value.as_deref().unwrap_or_default())
}

impl super::Database {
    /// Inserts an event row as given and returns its new ID.
    pub fn insert_event(&self, event: &NewEvent<'_>) -> Result<u64> {
        self.connection
            .execute(
                INSERT_EVENT_SQL,
                params![
                    event.publication_id.map(|id| id as i64),
                    event.title,
                    event.event_type,
                    event.event_date,
                    event.location,
                    event.address,
                    event.city,
                    event.state,
                    event.country,
                    event.description,
                    event.source_publication,
                ],
            )
            .db_context("Failed to insert event")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Creates an event from user input.
    ///
    /// The title must be non-empty after trimming; every absent optional text
    /// field is stored as an empty string.
    pub fn create_event(&self, params: &CreateEvent) -> Result<Event> {
        let title = params.validate()?;
        let new_event = NewEvent {
            publication_id: params.publication_id,
            title: &title,
            event_type: or_empty(&params.event_type),
            event_date: or_empty(&params.event_date),
            location: or_empty(&params.location),
            address: or_empty(&params.address),
            city: or_empty(&params.city),
            state: or_empty(&params.state),
            country: or_empty(&params.country),
            description: or_empty(&params.description),
            source_publication: or_empty(&params.source_publication),
        };
        let id = self.insert_event(&new_event)?;

        self.get_event(id)?
            .ok_or(ArchiveError::EventNotFound { id })
    }

    /// Retrieves an event by its ID.
    pub fn get_event(&self, id: u64) -> Result<Option<Event>> {
        self.connection
            .query_row(
                &format!("SELECT {EVENT_COLUMNS} FROM events WHERE event_id = ?1"),
                params![id as i64],
                event_from_row,
            )
            .optional()
            .db_context("Failed to query event")
    }

    /// Lists one page of events matching the filter, with the total count of
    /// matching rows across all pages.
    pub fn list_events(&self, params: &ListEvents) -> Result<Page<EventListing>> {
        let page = validate_page(params.page)?;
        let conditions = event_conditions(&params.filter);

        let total_count: i64 = self
            .connection
            .query_row(
                &event_count_sql(&conditions),
                &conditions.values()[..],
                |row| row.get(0),
            )
            .db_context("Failed to count events")?;

        let mut stmt = self
            .connection
            .prepare(&event_page_sql(&conditions, params.sort, params.order))
            .db_context("Failed to prepare query")?;

        let row_offset = offset(page) as i64;
        let mut values = conditions.values();
        values.push(&row_offset);

        let items = stmt
            .query_map(&values[..], listing_from_row)
            .db_context("Failed to query events")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch events")?;

        Ok(Page {
            items,
            total_count: total_count as u64,
            page,
        })
    }

    /// Writes a normalized change set over an existing event.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::EventNotFound` if no event has the given ID.
    pub fn update_event(&self, id: u64, changes: &EventChanges) -> Result<Event> {
        let updated = self
            .connection
            .execute(
                UPDATE_EVENT_SQL,
                params![
                    changes.title,
                    changes.event_type,
                    changes.event_date,
                    changes.location,
                    changes.address,
                    changes.city,
                    changes.state,
                    changes.country,
                    changes.description,
                    changes.source_publication,
                    changes.publication_id.map(|id| id as i64),
                    id as i64,
                ],
            )
            .db_context("Failed to update event")?;

        if updated == 0 {
            return Err(ArchiveError::EventNotFound { id });
        }

        self.get_event(id)?
            .ok_or(ArchiveError::EventNotFound { id })
    }

    /// Counts every stored event, titled or not.
    pub fn count_events(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_EVENTS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|n| n as u64)
            .db_context("Failed to count events")
    }
}
