//! Publication model definition.

use serde::{Deserialize, Serialize};

/// A single issue of a periodical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Title of the publication
    pub title: String,

    /// Volume number
    pub volume: i64,

    /// Issue number within the volume
    pub issue_number: i64,

    /// Issue date, usually `YYYY-MM-DD`
    pub issue_date: Option<String>,

    /// Title of the volume, if any
    pub volume_title: Option<String>,

    /// Author or publishing organization
    pub author_org: Option<String>,

    /// Where the issue was published
    pub location: Option<String>,
}
