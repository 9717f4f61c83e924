//! Validated change sets for updating records.
//!
//! Updates follow a "never store blank" policy: every submitted text value is
//! trimmed and an empty result is replaced by [`MISSING`] (or
//! [`MISSING_DATE`] for date columns) before it is written.

use std::collections::BTreeMap;

use super::EntityKind;
use crate::{error::ArchiveError, params::UpdateRecord};

/// Sentinel stored in place of a blank text value.
pub const MISSING: &str = "NA";

/// Sentinel stored in place of a blank date.
pub const MISSING_DATE: &str = "NA-NA-NA";

const EVENT_FIELDS: &[&str] = &[
    "event_title",
    "event_type",
    "event_date",
    "location",
    "address",
    "city",
    "state",
    "country",
    "description",
    "source_publication",
    "publication_id",
];

const PUBLICATION_FIELDS: &[&str] = &[
    "pub_title",
    "volume",
    "issue_number",
    "issue_date",
    "volume_title",
    "author_org",
    "location",
];

/// Trims a submitted value, substituting `sentinel` when nothing remains.
pub fn normalize_or(value: Option<&str>, sentinel: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => sentinel.to_string(),
    }
}

/// Parses an optional integer field; blank or absent means "leave unchanged".
fn optional_integer(fields: &BTreeMap<String, String>, name: &str) -> Result<Option<i64>, ArchiveError> {
    match fields.get(name).map(|v| v.trim()) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<i64>().map(Some).map_err(|_| {
            ArchiveError::invalid_input(name, format!("Expected an integer, got '{raw}'"))
        }),
    }
}

/// Rejects field names that do not belong to the record type.
fn check_field_names(fields: &BTreeMap<String, String>, allowed: &[&str]) -> Result<(), ArchiveError> {
    match fields.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(unknown) => Err(ArchiveError::invalid_input(
            unknown.as_str(),
            format!("Unknown field. Expected one of: {}", allowed.join(", ")),
        )),
        None => Ok(()),
    }
}

/// Normalized column values for an event update.
#[derive(Debug, Clone, PartialEq)]
pub struct EventChanges {
    pub title: String,
    pub event_type: String,
    pub event_date: String,
    pub location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub description: String,
    pub source_publication: String,
    /// New publication link; `None` keeps the current one
    pub publication_id: Option<u64>,
}

impl EventChanges {
    /// Builds a normalized change set from raw submitted fields.
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Result<Self, ArchiveError> {
        check_field_names(fields, EVENT_FIELDS)?;
        let text = |name: &str| normalize_or(fields.get(name).map(String::as_str), MISSING);

        let publication_id = optional_integer(fields, "publication_id")?
            .map(|id| {
                u64::try_from(id).map_err(|_| {
                    ArchiveError::invalid_input("publication_id", "Must not be negative")
                })
            })
            .transpose()?;

        Ok(Self {
            title: text("event_title"),
            event_type: text("event_type"),
            event_date: normalize_or(fields.get("event_date").map(String::as_str), MISSING_DATE),
            location: text("location"),
            address: text("address"),
            city: text("city"),
            state: text("state"),
            country: text("country"),
            description: text("description"),
            source_publication: text("source_publication"),
            publication_id,
        })
    }
}

/// Normalized column values for a publication update.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicationChanges {
    pub title: String,
    /// New volume; `None` keeps the current one
    pub volume: Option<i64>,
    /// New issue number; `None` keeps the current one
    pub issue_number: Option<i64>,
    pub issue_date: String,
    pub volume_title: String,
    pub author_org: String,
    pub location: String,
}

impl PublicationChanges {
    /// Builds a normalized change set from raw submitted fields.
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Result<Self, ArchiveError> {
        check_field_names(fields, PUBLICATION_FIELDS)?;
        let text = |name: &str| normalize_or(fields.get(name).map(String::as_str), MISSING);

        Ok(Self {
            title: text("pub_title"),
            volume: optional_integer(fields, "volume")?,
            issue_number: optional_integer(fields, "issue_number")?,
            issue_date: normalize_or(fields.get("issue_date").map(String::as_str), MISSING_DATE),
            volume_title: text("volume_title"),
            author_org: text("author_org"),
            location: text("location"),
        })
    }
}

/// A validated update for either record type.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordChanges {
    Event(EventChanges),
    Publication(PublicationChanges),
}

impl TryFrom<&UpdateRecord> for RecordChanges {
    type Error = ArchiveError;

    /// Resolves the record type and normalizes the submitted fields.
    ///
    /// # Errors
    ///
    /// * `ArchiveError::InvalidEntityType` - When the record type is unknown
    /// * `ArchiveError::InvalidInput` - When a field name is unknown or an
    ///   integer field does not parse
    fn try_from(params: &UpdateRecord) -> Result<Self, Self::Error> {
        let kind: EntityKind = params.entity_type.parse()?;
        Ok(match kind {
            EntityKind::Event => Self::Event(EventChanges::from_fields(&params.fields)?),
            EntityKind::Publication => {
                Self::Publication(PublicationChanges::from_fields(&params.fields)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_blank_event_fields_become_sentinels() {
        let changes =
            EventChanges::from_fields(&fields(&[("event_title", "  Rally  "), ("city", "   ")]))
                .unwrap();
        assert_eq!(changes.title, "Rally");
        assert_eq!(changes.city, "NA");
        assert_eq!(changes.description, "NA");
        assert_eq!(changes.event_date, "NA-NA-NA");
        assert_eq!(changes.publication_id, None);
    }

    #[test]
    fn test_blank_publication_date_uses_date_sentinel() {
        let changes = PublicationChanges::from_fields(&fields(&[
            ("pub_title", "It Ain't Me Babe"),
            ("issue_date", ""),
            ("volume", " 2 "),
        ]))
        .unwrap();
        assert_eq!(changes.issue_date, "NA-NA-NA");
        assert_eq!(changes.volume, Some(2));
        assert_eq!(changes.issue_number, None);
        assert_eq!(changes.author_org, "NA");
    }

    #[test]
    fn test_non_integer_volume_is_rejected() {
        let result = PublicationChanges::from_fields(&fields(&[("volume", "two")]));
        assert!(matches!(
            result,
            Err(ArchiveError::InvalidInput { ref field, .. }) if field == "volume"
        ));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = EventChanges::from_fields(&fields(&[("pub_title", "x")]));
        assert!(matches!(
            result,
            Err(ArchiveError::InvalidInput { ref field, .. }) if field == "pub_title"
        ));
    }

    #[test]
    fn test_update_record_with_unknown_type() {
        let params = UpdateRecord {
            entity_type: "resources".to_string(),
            id: 1,
            fields: BTreeMap::new(),
        };
        let result = RecordChanges::try_from(&params);
        assert!(matches!(result, Err(ArchiveError::InvalidEntityType { .. })));
    }

    #[test]
    fn test_normalize_or() {
        assert_eq!(normalize_or(None, MISSING), "NA");
        assert_eq!(normalize_or(Some(" x "), MISSING), "x");
        assert_eq!(normalize_or(Some("\t"), MISSING_DATE), "NA-NA-NA");
    }
}
