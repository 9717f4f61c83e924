//! Data models for publications, events, and report rows.
//!
//! This module contains the core domain types of the archive. Each model maps
//! one-to-one onto a table row (or a report row) and derives `Serialize` so
//! interfaces can emit JSON as well as markdown.
//!
//! # Module Organization
//!
//! - [`entity`]: Record type discriminator used by fetch and update
//! - [`publication`]: Publication issue records
//! - [`event`]: Reported events and their list view
//! - [`filters`]: Filter and sort types for list queries
//! - [`page`]: Paginated result sets
//! - [`report`]: Aggregate report rows
//! - [`requests`]: Normalized change sets for updates

pub mod entity;
pub mod event;
pub mod filters;
pub mod page;
pub mod publication;
pub mod report;
pub mod requests;

// Re-export all public types at the models level
pub use entity::{EntityKind, Record};
pub use event::{Event, EventListing};
pub use filters::{EventFilter, EventSort, PublicationFilter, PublicationSort, SortOrder};
pub use page::{Page, PAGE_SIZE};
pub use publication::Publication;
pub use requests::{EventChanges, PublicationChanges, RecordChanges, MISSING, MISSING_DATE};
pub use report::{
    CoverageRatio, LocationCount, SourceCount, SourcedEvent, TargetedCount, TrendPoint,
    TypeCount, TypeLocationCount,
};
