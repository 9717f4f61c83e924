//! Result wrappers for create operations.

use std::fmt;

use crate::models::{Event, Publication};

/// Wrapper type for displaying a newly created record.
///
/// # Examples
///
/// ```rust
/// use zine_core::{display::CreateResult, models::Publication};
///
/// let publication = Publication {
///     id: 3,
///     title: "It Ain't Me Babe".to_string(),
///     volume: 1,
///     issue_number: 2,
///     issue_date: Some("1970-02-15".to_string()),
///     volume_title: None,
///     author_org: None,
///     location: Some("Berkeley".to_string()),
/// };
///
/// let output = CreateResult::new(publication).to_string();
/// assert!(output.starts_with("Created publication with ID: 3"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Event> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created event with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Publication> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created publication with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
