//! Filter and sort types for querying events and publications.
//!
//! Sort columns are closed enums: callers pick a variant and the query builder
//! maps it to a fixed column name, so no caller-supplied text ever reaches the
//! SQL string outside of bound parameters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArchiveError;

/// Filter options for querying events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventFilter {
    /// Substring matched against title and description
    pub search: Option<String>,

    /// Exact match on the stored event type
    pub event_type: Option<String>,

    /// Substring match on city
    pub city: Option<String>,

    /// Substring match on state
    pub state: Option<String>,

    /// Substring match on country
    pub country: Option<String>,
}

/// Filter options for querying publications.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PublicationFilter {
    /// Substring matched against title, volume title and author/organization
    pub search: Option<String>,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ArchiveError::invalid_input(
                "order",
                format!("Invalid sort order: {s}. Must be 'asc' or 'desc'"),
            )),
        }
    }
}

/// Sortable event columns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventSort {
    #[default]
    Id,
    Title,
    Date,
    Type,
    City,
    State,
    Country,
    Source,
}

impl EventSort {
    /// Qualified column name in the event listing query.
    pub fn column(&self) -> &'static str {
        match self {
            EventSort::Id => "e.event_id",
            EventSort::Title => "e.event_title",
            EventSort::Date => "e.event_date",
            EventSort::Type => "e.event_type",
            EventSort::City => "e.city",
            EventSort::State => "e.state",
            EventSort::Country => "e.country",
            EventSort::Source => "e.source_publication",
        }
    }
}

impl FromStr for EventSort {
    type Err = ArchiveError;

    /// Accepts both short names and the stored column names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" | "event_id" => Ok(EventSort::Id),
            "title" | "event_title" => Ok(EventSort::Title),
            "date" | "event_date" => Ok(EventSort::Date),
            "type" | "event_type" => Ok(EventSort::Type),
            "city" => Ok(EventSort::City),
            "state" => Ok(EventSort::State),
            "country" => Ok(EventSort::Country),
            "source" | "source_publication" => Ok(EventSort::Source),
            _ => Err(ArchiveError::invalid_input(
                "sort",
                format!("Cannot sort events by '{s}'"),
            )),
        }
    }
}

/// Sortable publication columns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PublicationSort {
    #[default]
    Id,
    Title,
    Volume,
    Issue,
    Date,
}

impl PublicationSort {
    /// Column name in the publication listing query.
    pub fn column(&self) -> &'static str {
        match self {
            PublicationSort::Id => "pub_id",
            PublicationSort::Title => "pub_title",
            PublicationSort::Volume => "volume",
            PublicationSort::Issue => "issue_number",
            PublicationSort::Date => "issue_date",
        }
    }
}

impl FromStr for PublicationSort {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" | "pub_id" => Ok(PublicationSort::Id),
            "title" | "pub_title" => Ok(PublicationSort::Title),
            "volume" => Ok(PublicationSort::Volume),
            "issue" | "issue_number" => Ok(PublicationSort::Issue),
            "date" | "issue_date" => Ok(PublicationSort::Date),
            _ => Err(ArchiveError::invalid_input(
                "sort",
                format!("Cannot sort publications by '{s}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_sort_accepts_column_names() {
        assert_eq!("event_date".parse::<EventSort>().unwrap(), EventSort::Date);
        assert_eq!("date".parse::<EventSort>().unwrap(), EventSort::Date);
        assert_eq!(EventSort::Date.column(), "e.event_date");
    }

    #[test]
    fn test_event_sort_rejects_unlisted_columns() {
        let result = "event_date; DROP TABLE events".parse::<EventSort>();
        assert!(matches!(
            result,
            Err(ArchiveError::InvalidInput { ref field, .. }) if field == "sort"
        ));
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_publication_sort_columns() {
        assert_eq!(
            "issue".parse::<PublicationSort>().unwrap().column(),
            "issue_number"
        );
    }
}
