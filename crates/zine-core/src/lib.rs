//! Core library for the zine archive.
//!
//! The archive stores periodical issues (publications) and the events reported
//! in them in a single SQLite file. This crate provides the storage layer, CSV
//! import, the report queries, the cleaning passes, and markdown formatting
//! for everything it returns.
//!
//! # Layers
//!
//! - [`archive`]: Async entry point; one connection per operation
//! - [`db`]: Synchronous SQLite access, one `impl Database` per concern
//! - [`importer`]: CSV loading for publications, events and resources
//! - [`reports`]: Event-type splitting and tallying for the type reports
//! - [`models`] / [`params`]: Domain types and operation parameters
//! - [`display`]: Markdown rendering
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zine_core::{params::CreateEvent, ArchiveBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let archive = ArchiveBuilder::new()
//!     .with_database_path(Some("zines.db"))
//!     .build()
//!     .await?;
//!
//! let event = archive
//!     .create_event(&CreateEvent {
//!         title: "Abortion law repeal rally".to_string(),
//!         city: Some("San Francisco".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{event}");
//!
//! println!("Coverage: {}", archive.coverage().await?);
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod db;
pub mod display;
pub mod error;
pub mod importer;
pub mod models;
pub mod params;
pub mod reports;

// Re-export commonly used types
pub use archive::{Archive, ArchiveBuilder};
pub use db::Database;
pub use display::{CreateResult, OperationStatus};
pub use error::{ArchiveError, ErrorKind, Result};
pub use importer::{ImportSummary, ResourceSummary};
pub use models::{
    CoverageRatio, EntityKind, Event, EventFilter, EventListing, EventSort, Page, Publication,
    PublicationFilter, PublicationSort, Record, SortOrder,
};
pub use params::{
    CreateEvent, CreatePublication, FetchRecord, ImportFiles, ListEvents, ListPublications,
    UpdateRecord,
};
