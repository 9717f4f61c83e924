//! Publication CRUD operations and queries.

use rusqlite::{params, OptionalExtension};

use super::{
    event_queries::or_empty,
    query::{publication_conditions, publication_count_sql, publication_page_sql},
    rows::{publication_from_row, PUBLICATION_COLUMNS},
};
use crate::{
    error::{ArchiveError, DatabaseResultExt, Result},
    models::{page::offset, Page, Publication, PublicationChanges},
    params::{validate_page, CreatePublication, ListPublications},
};

const INSERT_PUBLICATION_SQL: &str = "INSERT INTO publications (pub_title, volume, issue_number, \
    issue_date, volume_title, author_org, location) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_PUBLICATION_SQL: &str = "UPDATE publications SET pub_title = ?1, \
    volume = COALESCE(?2, volume), issue_number = COALESCE(?3, issue_number), issue_date = ?4, \
    volume_title = ?5, author_org = ?6, location = ?7 WHERE pub_id = ?8";
const FIND_BY_ISSUE_SQL: &str =
    "SELECT pub_id FROM publications WHERE volume = ?1 AND issue_number = ?2 ORDER BY pub_id LIMIT 1";
const COUNT_PUBLICATIONS_SQL: &str = "SELECT COUNT(*) FROM publications";

/// Column values for one new publication row.
#[derive(Debug, Clone, Default)]
pub struct NewPublication<'a> {
    pub title: &'a str,
    pub volume: i64,
    pub issue_number: i64,
    pub issue_date: Option<&'a str>,
    pub volume_title: Option<&'a str>,
    pub author_org: Option<&'a str>,
    pub location: Option<&'a str>,
}

impl super::Database {
    /// Inserts a publication row as given and returns its new ID.
    pub fn insert_publication(&self, publication: &NewPublication<'_>) -> Result<u64> {
        self.connection
            .execute(
                INSERT_PUBLICATION_SQL,
                params![
                    publication.title,
                    publication.volume,
                    publication.issue_number,
                    publication.issue_date,
                    publication.volume_title,
                    publication.author_org,
                    publication.location,
                ],
            )
            .db_context("Failed to insert publication")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Creates a publication from user input.
    pub fn create_publication(&self, params: &CreatePublication) -> Result<Publication> {
        let title = params.validate()?;
        let id = self.insert_publication(&NewPublication {
            title: &title,
            volume: params.volume,
            issue_number: params.issue_number,
            issue_date: or_empty(&params.issue_date),
            volume_title: or_empty(&params.volume_title),
            author_org: or_empty(&params.author_org),
            location: or_empty(&params.location),
        })?;

        self.get_publication(id)?
            .ok_or(ArchiveError::PublicationNotFound { id })
    }

    /// Retrieves a publication by its ID.
    pub fn get_publication(&self, id: u64) -> Result<Option<Publication>> {
        self.connection
            .query_row(
                &format!("SELECT {PUBLICATION_COLUMNS} FROM publications WHERE pub_id = ?1"),
                params![id as i64],
                publication_from_row,
            )
            .optional()
            .db_context("Failed to query publication")
    }

    /// Looks up the publication for a `(volume, issue_number)` pair.
    ///
    /// The pair is not unique; the lowest ID wins.
    pub fn find_publication_by_issue(&self, volume: i64, issue_number: i64) -> Result<Option<u64>> {
        self.connection
            .query_row(FIND_BY_ISSUE_SQL, params![volume, issue_number], |row| {
                row.get::<_, i64>(0)
            })
            .optional()
            .map(|id| id.map(|id| id as u64))
            .db_context("Failed to look up publication by volume and issue")
    }

    /// Lists one page of publications matching the filter.
    pub fn list_publications(&self, params: &ListPublications) -> Result<Page<Publication>> {
        let page = validate_page(params.page)?;
        let conditions = publication_conditions(&params.filter);

        let total_count: i64 = self
            .connection
            .query_row(
                &publication_count_sql(&conditions),
                &conditions.values()[..],
                |row| row.get(0),
            )
            .db_context("Failed to count publications")?;

        let mut stmt = self
            .connection
            .prepare(&publication_page_sql(&conditions, params.sort, params.order))
            .db_context("Failed to prepare query")?;

        let row_offset = offset(page) as i64;
        let mut values = conditions.values();
        values.push(&row_offset);

        let items = stmt
            .query_map(&values[..], publication_from_row)
            .db_context("Failed to query publications")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch publications")?;

        Ok(Page {
            items,
            total_count: total_count as u64,
            page,
        })
    }

    /// Writes a normalized change set over an existing publication.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::PublicationNotFound` if no publication has the
    /// given ID.
    pub fn update_publication(&self, id: u64, changes: &PublicationChanges) -> Result<Publication> {
        let updated = self
            .connection
            .execute(
                UPDATE_PUBLICATION_SQL,
                params![
                    changes.title,
                    changes.volume,
                    changes.issue_number,
                    changes.issue_date,
                    changes.volume_title,
                    changes.author_org,
                    changes.location,
                    id as i64,
                ],
            )
            .db_context("Failed to update publication")?;

        if updated == 0 {
            return Err(ArchiveError::PublicationNotFound { id });
        }

        self.get_publication(id)?
            .ok_or(ArchiveError::PublicationNotFound { id })
    }

    /// Counts every stored publication.
    pub fn count_publications(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_PUBLICATIONS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|n| n as u64)
            .db_context("Failed to count publications")
    }
}
