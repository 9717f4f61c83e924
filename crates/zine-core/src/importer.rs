//! Bulk loading of publications, events and staged resources from CSV.
//!
//! Every row is written on its own, so a failure part-way through leaves the
//! earlier rows in place. Rows that cannot be decoded, and events whose
//! `(volume, issue_number)` matches no publication, are skipped and reported
//! as warnings rather than aborting the import.
//!
//! Leading and trailing whitespace is trimmed from every header and cell
//! before decoding, so padded values such as `" Berkeley "` are stored as
//! `"Berkeley"` and padded integers still parse.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    db::{cleaning::NewResource, event_queries::NewEvent, publication_queries::NewPublication},
    error::{ArchiveError, Result},
    models::{event::split_event_types, MISSING},
    params::ImportFiles,
    Database,
};

/// Outcome of a publications + events import.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ImportSummary {
    pub publications_imported: u64,
    pub events_imported: u64,
    /// One line per skipped row
    pub warnings: Vec<String>,
}

/// Outcome of a resources import.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ResourceSummary {
    /// Rows written after splitting multi-type resources
    pub resources_imported: u64,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PublicationRow {
    pub_title: String,
    volume: i64,
    issue_number: i64,
    issue_year: String,
    issue_month: String,
    issue_day: String,
    #[serde(default)]
    volume_title: String,
    #[serde(default)]
    author_org: String,
    #[serde(default)]
    location: String,
}

#[derive(Debug, Deserialize)]
struct EventRow {
    event_title: String,
    #[serde(default)]
    event_type: String,
    event_year: String,
    event_month: String,
    #[serde(rename = "event_date")]
    event_day: String,
    volume: i64,
    issue_number: i64,
    #[serde(default)]
    location: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    source_publication: String,
}

fn missing() -> String {
    MISSING.to_string()
}

#[derive(Debug, Deserialize)]
struct ResourceRow {
    #[serde(default = "missing")]
    resource_title: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    volume: Option<i64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    issue: Option<i64>,
    #[serde(default = "missing")]
    resource_type: String,
    #[serde(default = "missing")]
    location: String,
    #[serde(default = "missing")]
    address: String,
    #[serde(default = "missing")]
    city: String,
    #[serde(default = "missing")]
    state: String,
    #[serde(default = "missing")]
    country: String,
    #[serde(default = "missing")]
    source_publication: String,
    #[serde(default = "missing")]
    description: String,
}

/// Builds a `YYYY-MM-DD` string from its parts, zero-padding month and day.
///
/// The parts are not checked against the calendar.
pub fn assemble_date(year: &str, month: &str, day: &str) -> String {
    format!("{year}-{month:0>2}-{day:0>2}")
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| ArchiveError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Records a skipped row in both the log and the summary.
fn skip(warnings: &mut Vec<String>, message: String) {
    warn!("{message}");
    warnings.push(message);
}

impl Database {
    /// Imports publications first, then events linked to them by volume and
    /// issue number.
    pub fn import_csv(&self, files: &ImportFiles) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();

        let mut reader = open_reader(&files.publications)?;
        for (index, row) in reader.deserialize::<PublicationRow>().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    skip(
                        &mut summary.warnings,
                        format!("Skipping publication row {}: {e}", index + 1),
                    );
                    continue;
                }
            };

            let issue_date = assemble_date(&row.issue_year, &row.issue_month, &row.issue_day);
            self.insert_publication(&NewPublication {
                title: &row.pub_title,
                volume: row.volume,
                issue_number: row.issue_number,
                issue_date: Some(&issue_date),
                volume_title: Some(row.volume_title.as_str()),
                author_org: Some(row.author_org.as_str()),
                location: Some(row.location.as_str()),
            })?;
            summary.publications_imported += 1;
        }

        let mut reader = open_reader(&files.events)?;
        for (index, row) in reader.deserialize::<EventRow>().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    skip(
                        &mut summary.warnings,
                        format!("Skipping event row {}: {e}", index + 1),
                    );
                    continue;
                }
            };

            let Some(publication_id) =
                self.find_publication_by_issue(row.volume, row.issue_number)?
            else {
                skip(
                    &mut summary.warnings,
                    format!(
                        "No matching publication found for event: {} (Volume: {}, Issue: {})",
                        row.event_title, row.volume, row.issue_number
                    ),
                );
                continue;
            };

            let event_date = assemble_date(&row.event_year, &row.event_month, &row.event_day);
            self.insert_event(&NewEvent {
                publication_id: Some(publication_id),
                title: &row.event_title,
                event_type: Some(row.event_type.as_str()),
                event_date: Some(&event_date),
                location: Some(row.location.as_str()),
                address: Some(row.address.as_str()),
                city: Some(row.city.as_str()),
                state: Some(row.state.as_str()),
                country: Some(row.country.as_str()),
                description: Some(row.description.as_str()),
                source_publication: Some(row.source_publication.as_str()),
            })?;
            summary.events_imported += 1;
        }

        info!(
            "Imported {} publications and {} events ({} rows skipped)",
            summary.publications_imported,
            summary.events_imported,
            summary.warnings.len()
        );
        Ok(summary)
    }

    /// Recreates the resources table and stages every row of the CSV,
    /// writing one row per comma-separated resource type.
    pub fn import_resources(&self, path: &Path) -> Result<ResourceSummary> {
        let mut reader = open_reader(path)?;
        self.recreate_resources_table()?;

        let mut summary = ResourceSummary::default();
        for (index, row) in reader.deserialize::<ResourceRow>().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    skip(
                        &mut summary.warnings,
                        format!("Skipping resource row {}: {e}", index + 1),
                    );
                    continue;
                }
            };

            let mut types = split_event_types(&row.resource_type);
            if types.is_empty() {
                types.push(MISSING);
            }

            for resource_type in types {
                self.insert_resource(&NewResource {
                    title: &row.resource_title,
                    volume: row.volume,
                    issue: row.issue,
                    resource_type,
                    location: &row.location,
                    address: &row.address,
                    city: &row.city,
                    state: &row.state,
                    country: &row.country,
                    source_publication: &row.source_publication,
                    description: &row.description,
                })?;
                summary.resources_imported += 1;
            }
        }

        info!("Staged {} resources", summary.resources_imported);
        Ok(summary)
    }
}
