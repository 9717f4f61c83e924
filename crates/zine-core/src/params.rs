//! Parameter structures for archive operations
//!
//! These structures are shared by every interface (currently the CLI) and stay
//! free of framework-specific derives. Interface layers define their own
//! argument types and convert into these with `From` impls:
//!
//! ```text
//! CLI Args (clap) → Core Params → Archive → Database
//! ```

use std::{collections::BTreeMap, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ArchiveError, Result},
    models::{EventFilter, EventSort, PublicationFilter, PublicationSort, SortOrder},
};

/// Parameters for fetching one record by type and ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchRecord {
    /// Record type, `event` or `publication`
    pub entity_type: String,
    /// The ID of the record
    pub id: u64,
}

/// Parameters for creating a new event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Title of the event (required)
    pub title: String,
    /// Publication the event was reported in
    pub publication_id: Option<u64>,
    pub event_type: Option<String>,
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub source_publication: Option<String>,
}

/// Parameters for creating a new publication.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePublication {
    /// Title of the publication (required)
    pub title: String,
    pub volume: i64,
    pub issue_number: i64,
    pub issue_date: Option<String>,
    pub volume_title: Option<String>,
    pub author_org: Option<String>,
    pub location: Option<String>,
}

/// Rejects a title that is empty after trimming and returns the trimmed text.
fn required_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ArchiveError::invalid_input("title", "Title is required"));
    }
    Ok(trimmed.to_string())
}

impl CreateEvent {
    /// Validates the required title, returning the trimmed value.
    pub fn validate(&self) -> Result<String> {
        required_title(&self.title)
    }
}

impl CreatePublication {
    /// Validates the required title, returning the trimmed value.
    pub fn validate(&self) -> Result<String> {
        required_title(&self.title)
    }
}

/// Parameters for a form-style update of one record.
///
/// `fields` maps column names to raw submitted text. Text columns missing from
/// the map are treated as submitted blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Record type, `event` or `publication`
    pub entity_type: String,
    /// ID of the record to update
    pub id: u64,
    /// Submitted values keyed by column name
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// Parameters for listing events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEvents {
    #[serde(flatten)]
    pub filter: EventFilter,
    #[serde(default)]
    pub sort: EventSort,
    #[serde(default)]
    pub order: SortOrder,
    /// Page number, starting at 1
    pub page: u32,
}

impl Default for ListEvents {
    fn default() -> Self {
        Self {
            filter: EventFilter::default(),
            sort: EventSort::default(),
            order: SortOrder::default(),
            page: 1,
        }
    }
}

/// Parameters for listing publications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPublications {
    #[serde(flatten)]
    pub filter: PublicationFilter,
    #[serde(default)]
    pub sort: PublicationSort,
    #[serde(default)]
    pub order: SortOrder,
    /// Page number, starting at 1
    pub page: u32,
}

impl Default for ListPublications {
    fn default() -> Self {
        Self {
            filter: PublicationFilter::default(),
            sort: PublicationSort::default(),
            order: SortOrder::default(),
            page: 1,
        }
    }
}

/// Rejects page numbers below 1.
pub(crate) fn validate_page(page: u32) -> Result<u32> {
    if page == 0 {
        return Err(ArchiveError::invalid_input(
            "page",
            "Page numbers start at 1",
        ));
    }
    Ok(page)
}

/// Paths of the two CSV files loaded by the importer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportFiles {
    pub publications: PathBuf,
    pub events: PathBuf,
}

/// Parameters for deleting an inclusive range of event IDs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurgeEvents {
    pub from: u64,
    pub to: u64,
}

impl PurgeEvents {
    /// Ensures the range is not inverted.
    pub fn validate(&self) -> Result<()> {
        if self.from > self.to {
            return Err(ArchiveError::invalid_input(
                "from",
                format!("Range start {} is after range end {}", self.from, self.to),
            ));
        }
        Ok(())
    }

    /// The validated range as SQLite integers.
    pub fn bounds(&self) -> Result<(i64, i64)> {
        self.validate()?;
        let from = i64::try_from(self.from).map_err(|_| {
            ArchiveError::invalid_input("from", format!("Event ID {} is out of range", self.from))
        })?;
        let to = i64::try_from(self.to).map_err(|_| {
            ArchiveError::invalid_input("to", format!("Event ID {} is out of range", self.to))
        })?;
        Ok((from, to))
    }
}

/// Parameters for renaming an exact event type value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameEventType {
    pub from: String,
    pub to: String,
}

/// Parameters for loading the transitional resources table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportResources {
    pub path: PathBuf,
}

/// Parameters for moving one resource category into events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrateResources {
    /// Resource type to move, e.g. `Courses`
    pub category: String,
    /// Event type to assign; defaults to the category itself
    pub event_type: Option<String>,
}

/// Parameters for the city-restricted advertisement/protest report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetedReport {
    pub cities: Vec<String>,
}

impl Default for TargetedReport {
    fn default() -> Self {
        Self {
            cities: vec!["San Francisco".to_string(), "Los Angeles".to_string()],
        }
    }
}
