//! Record type discriminator.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Event, Publication};
use crate::error::ArchiveError;

/// The two persistent record types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A row of the `events` table
    Event,

    /// A row of the `publications` table
    Publication,
}

impl FromStr for EntityKind {
    type Err = ArchiveError;

    /// Accepts singular and plural spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "event" | "events" => Ok(EntityKind::Event),
            "publication" | "publications" | "pub" | "pubs" => Ok(EntityKind::Publication),
            _ => Err(ArchiveError::InvalidEntityType {
                name: s.to_string(),
            }),
        }
    }
}

impl EntityKind {
    /// Not-found error for an id of this record type.
    pub fn not_found(&self, id: u64) -> ArchiveError {
        match self {
            EntityKind::Event => ArchiveError::EventNotFound { id },
            EntityKind::Publication => ArchiveError::PublicationNotFound { id },
        }
    }
}

/// A fetched record of either type.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Event(Event),
    Publication(Publication),
}

impl Record {
    /// Identifier of the wrapped record.
    pub fn id(&self) -> u64 {
        match self {
            Record::Event(event) => event.id,
            Record::Publication(publication) => publication.id,
        }
    }

    /// Record type of the wrapped record.
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Event(_) => EntityKind::Event,
            Record::Publication(_) => EntityKind::Publication,
        }
    }
}
