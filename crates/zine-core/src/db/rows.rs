//! Row mappers shared by the query modules.

use rusqlite::{types::ValueRef, Row};

use crate::models::{Event, EventListing, Publication};

/// Columns read by [`event_from_row`], in order.
pub const EVENT_COLUMNS: &str = "event_id, publication_id, event_title, event_type, event_date, \
    location, address, city, state, country, description, source_publication";

/// Columns read by [`publication_from_row`], in order.
pub const PUBLICATION_COLUMNS: &str =
    "pub_id, pub_title, volume, issue_number, issue_date, volume_title, author_org, location";

/// Reads a column as text whatever its storage class.
///
/// `DATE` columns have numeric affinity, so a bare year such as `1970` comes
/// back as an integer.
pub fn lenient_text(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}

/// Maps the first twelve columns of a row onto an [`Event`].
pub fn event_from_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get::<_, i64>(0)? as u64,
        publication_id: row.get::<_, Option<i64>>(1)?.map(|id| id as u64),
        title: row.get(2)?,
        event_type: row.get(3)?,
        event_date: lenient_text(row, 4)?,
        location: row.get(5)?,
        address: row.get(6)?,
        city: row.get(7)?,
        state: row.get(8)?,
        country: row.get(9)?,
        description: row.get(10)?,
        source_publication: row.get(11)?,
    })
}

/// Maps an event row followed by the publication title, volume and issue.
pub fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<EventListing> {
    Ok(EventListing {
        event: event_from_row(row)?,
        publication_title: row.get(12)?,
        volume: row.get(13)?,
        issue_number: row.get(14)?,
    })
}

/// Maps a row selected with [`PUBLICATION_COLUMNS`] onto a [`Publication`].
pub fn publication_from_row(row: &Row<'_>) -> rusqlite::Result<Publication> {
    Ok(Publication {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        volume: row.get(2)?,
        issue_number: row.get(3)?,
        issue_date: lenient_text(row, 4)?,
        volume_title: row.get(5)?,
        author_org: row.get(6)?,
        location: row.get(7)?,
    })
}
