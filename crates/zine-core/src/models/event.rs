//! Event model definition and related functionality.

use serde::{Deserialize, Serialize};

/// An event reported in a publication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Publication this event was reported in, if linked
    pub publication_id: Option<u64>,

    /// Title of the event
    pub title: String,

    /// Event type; may hold several comma-separated categories
    pub event_type: Option<String>,

    /// Event date, free text (usually `YYYY-MM-DD`)
    pub event_date: Option<String>,

    /// Name of the venue
    pub location: Option<String>,

    /// Street address of the venue
    pub address: Option<String>,

    pub city: Option<String>,

    pub state: Option<String>,

    pub country: Option<String>,

    /// Detailed description of the event
    pub description: Option<String>,

    /// Free-text name of the reporting source, distinct from `publication_id`
    pub source_publication: Option<String>,
}

impl Event {
    /// Individual categories of this event's type.
    pub fn event_types(&self) -> Vec<&str> {
        self.event_type
            .as_deref()
            .map(split_event_types)
            .unwrap_or_default()
    }
}

/// Splits a stored `event_type` value into its trimmed, non-empty categories.
///
/// `"Protest, March"` yields `["Protest", "March"]`.
pub fn split_event_types(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Composes the `"city, state, country"` label used by location reports.
pub fn compose_location(city: Option<&str>, state: Option<&str>, country: Option<&str>) -> String {
    [city, state, country]
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect::<Vec<_>>()
        .join(", ")
}

/// An event row as shown in listings, joined to its publication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventListing {
    #[serde(flatten)]
    pub event: Event,

    /// Title of the linked publication
    pub publication_title: Option<String>,

    /// Volume of the linked publication
    pub volume: Option<i64>,

    /// Issue number of the linked publication
    pub issue_number: Option<i64>,
}
